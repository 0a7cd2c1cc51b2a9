//! Wire lines shared by the integration tests, grouped by the message kind
//! each one must classify as.

#![allow(dead_code)]

pub const PING: &str = "PING :tmi.twitch.tv";
pub const RECONNECT: &str = ":tmi.twitch.tv RECONNECT";
pub const RECONNECT_BARE: &str = "RECONNECT";

pub const PRIVMSG: &str = "@badges=global_mod/1,turbo/1;color=#0D4200;display-name=dallas;emotes=25:0-4,12-16/1902:6-10;id=b34ccfc7-4977-403a-8a94-33c6bac34fb8;mod=0;room-id=1337;subscriber=0;tmi-sent-ts=1507246572675;turbo=1;user-id=1337;user-type=global_mod :ronni!ronni@ronni.tmi.twitch.tv PRIVMSG #dallas :Kappa Keepo Kappa";
pub const PRIVMSG_CHEER: &str = "@badges=staff/1,bits/1000;bits=100;color=;display-name=dallas;emotes=;id=b34ccfc7-4977-403a-8a94-33c6bac34fb8;mod=0;room-id=1337;subscriber=0;tmi-sent-ts=1507246572675;turbo=1;user-id=1337;user-type=staff :ronni!ronni@ronni.tmi.twitch.tv PRIVMSG #dallas :cheer100";
pub const PLAIN_MESSAGE: &str = ":ronni!ronni@ronni.tmi.twitch.tv PRIVMSG #dallas :Kappa Keepo Kappa";

pub const CLEARCHAT_TIMEOUT: &str = "@ban-duration=600;room-id=99999999;target-user-id=99999999;tmi-sent-ts=1524962471755 :tmi.twitch.tv CLEARCHAT #channel :nick";
pub const CLEARCHAT_BAN: &str = "@ban-reason=Follow\\sthe\\srules;room-id=1337;target-user-id=42;tmi-sent-ts=1507246572675 :tmi.twitch.tv CLEARCHAT #dallas :ronni";
pub const CLEARCHAT_ALL: &str = "@room-id=1337;tmi-sent-ts=1507246572675 :tmi.twitch.tv CLEARCHAT #dallas";

pub const GLOBALUSERSTATE: &str = "@color=#0D4200;display-name=dallas;emote-sets=0,33,50,237,793,2126,3517,4578,5569,9400,10337,12239;turbo=0;user-id=1337;user-type=admin :tmi.twitch.tv GLOBALUSERSTATE";

pub const ROOMSTATE_SNAPSHOT: &str = "@broadcaster-lang=;emote-only=0;followers-only=-1;r9k=0;rituals=0;room-id=12345678;slow=0;subs-only=0 :tmi.twitch.tv ROOMSTATE #bar";
pub const ROOMSTATE_UPDATE: &str = "@room-id=12345678;slow=10 :tmi.twitch.tv ROOMSTATE #bar";

pub const USERNOTICE_RESUB: &str = "@badges=staff/1,broadcaster/1,turbo/1;color=#008000;display-name=ronni;emotes=;id=db25007f-7a18-43eb-9379-80131e44d633;login=ronni;mod=0;msg-id=resub;msg-param-months=6;msg-param-sub-plan=Prime;msg-param-sub-plan-name=Prime;room-id=1337;subscriber=1;system-msg=ronni\\shas\\ssubscribed\\sfor\\s6\\smonths!;tmi-sent-ts=1507246572675;turbo=1;user-id=1337;user-type=staff :tmi.twitch.tv USERNOTICE #dallas :Great stream -- keep it up!";
pub const USERNOTICE_SUBGIFT: &str = "@badges=staff/1,premium/1;color=#0000FF;display-name=TWW2;emotes=;id=e9176cd8-5e22-4684-ad40-ce53c2561c5e;login=tww2;mod=0;msg-id=subgift;msg-param-months=1;msg-param-recipient-display-name=Mr_Woodchuck;msg-param-recipient-id=89614178;msg-param-recipient-user-name=mr_woodchuck;msg-param-sub-plan-name=House\\sof\\sNyoro~n;msg-param-sub-plan=1000;room-id=19571752;subscriber=0;system-msg=TWW2\\sgifted\\sa\\sTier\\s1\\ssub\\sto\\sMr_Woodchuck!;tmi-sent-ts=1521159445153;turbo=0;user-id=13405587;user-type=staff :tmi.twitch.tv USERNOTICE #forstycup";
pub const USERNOTICE_RAID: &str = "@badges=turbo/1;color=#9ACD32;display-name=TestChannel;emotes=;id=3d830f12-795c-447d-af3c-ea05e40fbddb;login=testchannel;mod=0;msg-id=raid;msg-param-displayName=TestChannel;msg-param-login=testchannel;msg-param-viewerCount=15;room-id=56379257;subscriber=0;system-msg=15\\sraiders\\sfrom\\sTestChannel\\shave\\sjoined\\n!;tmi-sent-ts=1507246572675;turbo=1;user-id=123456;user-type= :tmi.twitch.tv USERNOTICE #othertestchannel";
pub const USERNOTICE_RITUAL: &str = "@badges=;color=;display-name=SevenTest1;emotes=30259:0-6;id=37feed0f-b9c7-4c3a-b475-21c6c6d21c3d;login=seventest1;mod=0;msg-id=ritual;msg-param-ritual-name=new_chatter;room-id=6316121;subscriber=0;system-msg=Seventoes\\sis\\snew\\shere!;tmi-sent-ts=1508363903826;turbo=0;user-id=131260580;user-type= :tmi.twitch.tv USERNOTICE #seventoes :HeyGuys";

pub const USERSTATE: &str = "@color=#0D4200;display-name=ronni;emote-sets=0,33,50,237,793,2126,3517,4578,5569,9400,10337,12239;mod=1;subscriber=1;turbo=1;user-type=staff :tmi.twitch.tv USERSTATE #dallas";

pub const NOTICE: &str = "@msg-id=slow_off :tmi.twitch.tv NOTICE #dallas :This room is no longer in slow mode.";

pub const HOSTTARGET_START: &str = ":tmi.twitch.tv HOSTTARGET #hosting_channel :target_channel 15";
pub const HOSTTARGET_STOP: &str = ":tmi.twitch.tv HOSTTARGET #hosting_channel :- 0";

pub const JOIN: &str = ":ronni!ronni@ronni.tmi.twitch.tv JOIN #dallas";
pub const PART: &str = ":ronni!ronni@ronni.tmi.twitch.tv PART #dallas";

pub const MODE_GAINED: &str = ":jtv MODE #dallas +o ronni";
pub const MODE_LOST: &str = ":jtv MODE #dallas -o ronni";

pub const NAMES_LIST: &str = ":ronni.tmi.twitch.tv 353 ronni = #dallas :ronni fred wilma";
pub const NAMES_END: &str = ":ronni.tmi.twitch.tv 366 ronni #dallas :End of /NAMES list";

pub const PLAIN_CLEARCHAT_USER: &str = ":tmi.twitch.tv CLEARCHAT #dallas :ronni";
pub const PLAIN_CLEARCHAT_ALL: &str = ":tmi.twitch.tv CLEARCHAT #dallas";
pub const PLAIN_ROOMSTATE: &str = ":tmi.twitch.tv ROOMSTATE #dallas";
pub const PLAIN_USERNOTICE: &str = ":tmi.twitch.tv USERNOTICE #dallas :Great stream -- keep it up!";
pub const PLAIN_USERSTATE: &str = ":tmi.twitch.tv USERSTATE #dallas";

/// Every fixture with the kind it classifies as.
pub const FIXTURES: &[(&str, &str)] = &[
    ("ping", PING),
    ("reconnect", RECONNECT),
    ("reconnect", RECONNECT_BARE),
    ("privmsg", PRIVMSG),
    ("privmsg", PRIVMSG_CHEER),
    ("plain_message", PLAIN_MESSAGE),
    ("clear_chat", CLEARCHAT_TIMEOUT),
    ("clear_chat", CLEARCHAT_BAN),
    ("clear_chat", CLEARCHAT_ALL),
    ("global_user_state", GLOBALUSERSTATE),
    ("room_state", ROOMSTATE_SNAPSHOT),
    ("room_state", ROOMSTATE_UPDATE),
    ("user_notice", USERNOTICE_RESUB),
    ("user_notice", USERNOTICE_SUBGIFT),
    ("user_notice", USERNOTICE_RAID),
    ("user_notice", USERNOTICE_RITUAL),
    ("user_state", USERSTATE),
    ("notice", NOTICE),
    ("host_target", HOSTTARGET_START),
    ("host_target", HOSTTARGET_STOP),
    ("join", JOIN),
    ("part", PART),
    ("mode_change", MODE_GAINED),
    ("mode_change", MODE_LOST),
    ("names", NAMES_LIST),
    ("names", NAMES_END),
    ("plain_clear_chat", PLAIN_CLEARCHAT_USER),
    ("plain_clear_chat", PLAIN_CLEARCHAT_ALL),
    ("plain_room_state", PLAIN_ROOMSTATE),
    ("plain_user_notice", PLAIN_USERNOTICE),
    ("plain_user_state", PLAIN_USERSTATE),
];

/// Lines that no shape accepts.
pub const UNRECOGNIZED: &[&str] = &[
    "GARBAGE not a real irc line",
    "",
    "PONG :tmi.twitch.tv",
    ":tmi.twitch.tv 001 ronni :Welcome, GLHF!",
    ":tmi.twitch.tv CAP * ACK :twitch.tv/tags",
    ":tmi.twitch.tv NOTICE * :Login authentication failed",
    ":ronni!ronni@ronni.tmi.twitch.tv PRIVMSG dallas :no channel prefix",
    ":tmi.twitch.tv CLEARCHAT dallas :ronni",
    "@room-id=1 :tmi.twitch.tv USERSTATE dallas",
    ":jtv MODE #dallas +v ronni",
];
