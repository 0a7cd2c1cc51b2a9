//! Benchmarks for line classification and single-shape decoding.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tmi_proto::{classify, Classifier, Line, Names, PrivMsg, Shape, UserNotice};

/// Keepalive, first in trial order
const PING: &str = "PING :tmi.twitch.tv";

/// Chat without the tags capability
const PLAIN_MESSAGE: &str = ":ronni!ronni@ronni.tmi.twitch.tv PRIVMSG #dallas :Kappa Keepo Kappa";

/// Chat with the full tag block
const PRIVMSG: &str = "@badges=global_mod/1,turbo/1;color=#0D4200;display-name=dallas;emotes=25:0-4,12-16/1902:6-10;id=b34ccfc7-4977-403a-8a94-33c6bac34fb8;mod=0;room-id=1337;subscriber=0;tmi-sent-ts=1507246572675;turbo=1;user-id=1337;user-type=global_mod :ronni!ronni@ronni.tmi.twitch.tv PRIVMSG #dallas :Kappa Keepo Kappa";

/// Largest tag block the service sends
const USERNOTICE: &str = "@badges=staff/1,broadcaster/1,turbo/1;color=#008000;display-name=ronni;emotes=;id=db25007f-7a18-43eb-9379-80131e44d633;login=ronni;mod=0;msg-id=resub;msg-param-months=6;msg-param-sub-plan=Prime;msg-param-sub-plan-name=Prime;room-id=1337;subscriber=1;system-msg=ronni\\shas\\ssubscribed\\sfor\\s6\\smonths!;tmi-sent-ts=1507246572675;turbo=1;user-id=1337;user-type=staff :tmi.twitch.tv USERNOTICE #dallas :Great stream -- keep it up!";

/// Last in trial order
const NAMES: &str = ":ronni.tmi.twitch.tv 353 ronni = #dallas :ronni fred wilma barney betty bamm_bamm pebbles";

/// Rejected by every shape
const GARBAGE: &str = "GARBAGE not a real irc line";

fn benchmark_lexing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Line Lexing");

    for (name, raw) in [("ping", PING), ("privmsg", PRIVMSG), ("usernotice", USERNOTICE)] {
        group.bench_with_input(BenchmarkId::new("lex", name), raw, |b, raw| {
            b.iter(|| black_box(Line::lex(black_box(raw))))
        });
    }

    group.finish();
}

fn benchmark_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("Classification");
    let classifier = Classifier::default();

    let lines = [
        ("ping", PING),
        ("plain_message", PLAIN_MESSAGE),
        ("privmsg", PRIVMSG),
        ("usernotice", USERNOTICE),
        ("names", NAMES),
        ("garbage", GARBAGE),
    ];

    for (name, raw) in lines {
        group.bench_with_input(BenchmarkId::new("classify", name), raw, |b, raw| {
            b.iter(|| black_box(classifier.classify(black_box(raw))))
        });
    }

    group.bench_function("default_config", |b| {
        b.iter(|| black_box(classify(black_box(PRIVMSG))))
    });

    group.finish();
}

fn benchmark_single_shape(c: &mut Criterion) {
    let mut group = c.benchmark_group("Single Shape");

    group.bench_function("privmsg", |b| {
        b.iter(|| black_box(PrivMsg::parse(black_box(PRIVMSG))))
    });

    group.bench_function("usernotice", |b| {
        b.iter(|| black_box(UserNotice::parse(black_box(USERNOTICE))))
    });

    group.bench_function("names", |b| {
        b.iter(|| black_box(Names::parse(black_box(NAMES))))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_lexing,
    benchmark_classify,
    benchmark_single_shape,
);

criterion_main!(benches);
