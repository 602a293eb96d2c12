//! Line-oriented input adapter
//!
//! Turns text commands into button events and pushes them into the bounded
//! event queue. Each whitespace-separated token is one button:
//!
//! | token | key |
//! |---|---|
//! | `w`, `k`, `up` | Up |
//! | `s`, `j`, `down` | Down |
//! | `a`, `left` | Left |
//! | `d`, `right` | Right |
//! | `f`, `ok`, `space` | Ok |
//! | `q`, `back` | Back |
//!
//! A single uppercase letter is a long press. A `*N` suffix sends the key as
//! `N` repeat events (`w*5`). End of input sends Back.

use std::io::{self, BufRead};
use std::sync::mpsc::SyncSender;
use std::thread::{self, JoinHandle};

use crate::sim::{InputEvent, InputKey, InputKind};

/// Upper bound for `*N` so one token cannot flood the queue forever
pub const MAX_REPEAT: usize = 64;

fn parse_key(name: &str) -> Option<InputKey> {
    let key = match name.to_ascii_lowercase().as_str() {
        "w" | "k" | "up" => InputKey::Up,
        "s" | "j" | "down" => InputKey::Down,
        "a" | "left" => InputKey::Left,
        "d" | "right" => InputKey::Right,
        "f" | "ok" | "space" => InputKey::Ok,
        "q" | "back" => InputKey::Back,
        _ => return None,
    };
    Some(key)
}

/// Events for one token; unknown tokens yield nothing
pub fn parse_token(token: &str) -> Vec<InputEvent> {
    let (name, repeat) = match token.split_once('*') {
        Some((name, n)) => match n.parse::<usize>() {
            Ok(n) => (name, Some(n.min(MAX_REPEAT))),
            Err(_) => return Vec::new(),
        },
        None => (token, None),
    };

    let Some(key) = parse_key(name) else {
        return Vec::new();
    };

    match repeat {
        Some(n) => vec![InputEvent::new(key, InputKind::Repeat); n],
        None => {
            let long = name.len() == 1 && name.chars().all(|c| c.is_ascii_uppercase());
            let kind = if long { InputKind::Long } else { InputKind::Short };
            vec![InputEvent::new(key, kind)]
        }
    }
}

/// Events for a whole line
pub fn parse_line(line: &str) -> Vec<InputEvent> {
    line.split_whitespace().flat_map(parse_token).collect()
}

/// Feed `reader` into the queue until it ends or the queue is dropped
///
/// Blocks on a full queue, matching the device's bounded input buffer.
pub fn pump<R: BufRead>(reader: R, queue: &SyncSender<InputEvent>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::warn!("Input read failed: {}", e);
                break;
            }
        };
        let events = parse_line(&line);
        if events.is_empty() && !line.trim().is_empty() {
            log::debug!("Unrecognised input {:?}", line.trim());
        }
        for event in events {
            if queue.send(event).is_err() {
                return;
            }
        }
    }
    let _ = queue.send(InputEvent::short(InputKey::Back));
}

/// Run [`pump`] on a background thread
pub fn spawn_reader<R>(reader: R, queue: SyncSender<InputEvent>) -> io::Result<JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    thread::Builder::new()
        .name("input".into())
        .spawn(move || pump(reader, &queue))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::mpsc;

    #[test]
    fn test_parse_keys_and_kinds() {
        assert_eq!(parse_token("w"), vec![InputEvent::short(InputKey::Up)]);
        assert_eq!(parse_token("down"), vec![InputEvent::short(InputKey::Down)]);
        assert_eq!(
            parse_token("S"),
            vec![InputEvent::new(InputKey::Down, InputKind::Long)]
        );
        // Whole words are never long presses
        assert_eq!(parse_token("UP"), vec![InputEvent::short(InputKey::Up)]);
        assert!(parse_token("x").is_empty());
    }

    #[test]
    fn test_parse_repeat() {
        let events = parse_token("j*3");
        assert_eq!(events.len(), 3);
        assert!(events.iter().all(|e| e.key == InputKey::Down && e.kind == InputKind::Repeat));
        assert_eq!(parse_token("j*1000").len(), MAX_REPEAT);
        assert!(parse_token("j*lots").is_empty());
    }

    #[test]
    fn test_parse_line() {
        let events = parse_line("  w s\tf q ");
        let keys: Vec<_> = events.iter().map(|e| e.key).collect();
        assert_eq!(
            keys,
            vec![InputKey::Up, InputKey::Down, InputKey::Ok, InputKey::Back]
        );
    }

    #[test]
    fn test_pump_appends_back_at_eof() {
        let (tx, rx) = mpsc::sync_channel(16);
        pump(Cursor::new("w\n\nnonsense\ns*2\n"), &tx);
        drop(tx);
        let events: Vec<_> = rx.iter().collect();
        assert_eq!(events.len(), 4);
        assert_eq!(events[0], InputEvent::short(InputKey::Up));
        assert_eq!(events[3], InputEvent::short(InputKey::Back));
    }

    #[test]
    fn test_pump_stops_when_queue_dropped() {
        let (tx, rx) = mpsc::sync_channel(1);
        drop(rx);
        // Must return rather than block
        pump(Cursor::new("w\nw\nw\n"), &tx);
    }
}
