use std::io::{self, BufRead, Write};

use env_logger::Env;
use tokenize::{ids_to_string, Codec, Token};

fn init_logging() {
    // warnings surface dynamic ID collisions; RUST_LOG=debug shows every learned word
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format_timestamp(None);
    let _ = builder.try_init();
}

fn print_tokens(tokens: &[Token]) {
    for t in tokens {
        let marker = if t.is_common { "*" } else { " " };
        println!("  {} {:>6}  {:?}", marker, t.id, t.text);
    }
    println!("ids: {}", ids_to_string(tokens));
}

fn main() {
    init_logging();
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let mut codec = Codec::new();

    // single-shot: encode the joined arguments and exit
    if !args.is_empty() {
        let text = args.join(" ");
        print_tokens(&codec.encode(&text));
        return;
    }

    println!("tokenize console - text to encode, ':decode <ids>', ':reset', ':stats', ':vocab', 'quit'");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let s = line.trim_end_matches(['\r', '\n']);
        if s.trim().eq_ignore_ascii_case("quit") || s.trim().eq_ignore_ascii_case("exit") {
            println!("Bye");
            break;
        }
        if let Some(ids) = s.strip_prefix(":decode") {
            println!("{}", codec.decode(ids));
        } else if s.trim() == ":reset" {
            codec.reset();
            println!("learned vocabulary cleared");
        } else if s.trim() == ":stats" {
            println!(
                "dictionary: {}  total: {}  learned: {}",
                codec.dictionary_size(),
                codec.total_vocab_size(),
                codec.dynamic_size()
            );
        } else if s.trim() == ":vocab" {
            for (text, id) in codec.vocabulary().dynamic {
                println!("  {:>6}  {:?}", id, text);
            }
        } else if !s.trim().is_empty() {
            let (tokens, stats) = codec.encode_with_stats(s);
            print_tokens(&tokens);
            println!(
                "{} characters, {} tokens ({} common, {} learned)",
                stats.characters, stats.tokens, stats.common, stats.dynamic
            );
        }
        let _ = stdout.flush();
    }
}
