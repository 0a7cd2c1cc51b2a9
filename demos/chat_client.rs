//! Chat client example
//!
//! Logs in to Twitch chat, joins one channel and prints what happens there.
//! Anyone who types `!ping` gets a reply.
//!
//! ```text
//! TMI_CHANNEL=#dallas TMI_NICK=ronni TMI_TOKEN=oauth:... cargo run --example chat_client
//! ```

use std::env;

use anyhow::Context;
use tmi_proto::{Client, ClientConfig, Message, OutboundQueue, UserNoticePayload};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let channel = env::var("TMI_CHANNEL").context("TMI_CHANNEL is not set")?;
    let nick = env::var("TMI_NICK").context("TMI_NICK is not set")?;
    let token = env::var("TMI_TOKEN").context("TMI_TOKEN is not set")?;

    let config = ClientConfig::new(channel, nick, token);
    let mut client = Client::connect(config).await?;
    println!("✓ Joined {}", client.config().channel);

    let mut handler = |msg: &Message, out: &OutboundQueue| match msg {
        Message::PrivMsg(chat) => {
            println!("<{}> {}", chat.display_name, chat.plain.text);
            if chat.plain.text.trim() == "!ping" {
                out.push(tmi_proto::encode::privmsg(
                    &chat.plain.target,
                    &format!("@{} pong", chat.display_name),
                ));
            }
        }
        Message::PlainMessage(chat) => println!("<{}> {}", chat.nick, chat.text),
        Message::UserNotice(notice) => match &notice.payload {
            UserNoticePayload::Raid(raid) => {
                println!("★ raid from {} with {} viewers", raid.display_name, raid.viewer_count)
            }
            _ => println!("★ {}", notice.system_msg),
        },
        Message::ClearChat(clear) => match &clear.user {
            Some(user) => println!("✗ {} was removed from chat", user),
            None => println!("✗ chat was cleared"),
        },
        Message::Join(join) => println!("→ {} joined", join.user),
        Message::Part(part) => println!("← {} left", part.user),
        other => println!("· {}", other.kind()),
    };

    client.say("hello from tmi-proto");
    client.run(&mut handler).await?;
    println!("Connection closed");
    Ok(())
}
