use std::io::{self, BufRead};
use std::time::Duration;

use cozy_chess::Color;

use crate::board::Position;
use crate::clock::Clock;
use crate::eval::Tapered;
use crate::search::{Searcher, MAX_DEPTH};

/// Minimal UCI front-end over the searcher. The searcher (and with it the
/// transposition table) lives across `position`/`go` cycles and across games.
pub struct UciEngine {
    pos: Position,
    searcher: Searcher<Tapered>,
}

impl Default for UciEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl UciEngine {
    pub fn new() -> Self {
        Self { pos: Position::startpos(), searcher: Searcher::new(Tapered::new()) }
    }

    fn cmd_uci(&self) {
        println!("id name Taperbot");
        println!("id author Taperbot Team");
        println!("uciok");
    }

    fn cmd_isready(&self) {
        println!("readyok");
    }

    fn cmd_ucinewgame(&mut self) {
        self.pos = Position::startpos();
    }

    fn cmd_position(&mut self, args: &str) {
        // 'position startpos [moves ...]' or 'position fen <fen> [moves ...]'
        let mut tokens = args.split_whitespace();
        let mut pos = match tokens.next() {
            Some("startpos") => Position::startpos(),
            Some("fen") => {
                let fen_fields: Vec<&str> = tokens.by_ref().take(6).collect();
                match Position::from_fen(&fen_fields.join(" ")) {
                    Ok(p) => p,
                    Err(e) => {
                        log::warn!("{e}");
                        return;
                    }
                }
            }
            _ => return,
        };
        if let Some("moves") = tokens.next() {
            for m in tokens {
                if let Err(e) = pos.play_uci(m) {
                    log::warn!("{e}");
                    return;
                }
            }
        }
        self.pos = pos;
    }

    fn cmd_go(&mut self, args: &str) {
        let mut depth: Option<i32> = None;
        let mut movetime: Option<u64> = None;
        let mut wtime: Option<u64> = None;
        let mut btime: Option<u64> = None;
        let mut tokens = args.split_whitespace();
        while let Some(tok) = tokens.next() {
            let value = |t: Option<&str>| t.and_then(|s| s.parse::<u64>().ok());
            match tok {
                "depth" => depth = tokens.next().and_then(|s| s.parse().ok()),
                "movetime" => movetime = value(tokens.next()),
                "wtime" => wtime = value(tokens.next()),
                "btime" => btime = value(tokens.next()),
                _ => {}
            }
        }

        let our_time = match self.pos.side_to_move() {
            Color::White => wtime,
            Color::Black => btime,
        };
        let clock = if let Some(ms) = our_time {
            Clock::budget(Duration::from_millis(ms))
        } else if let Some(ms) = movetime {
            Clock::movetime(Duration::from_millis(ms))
        } else {
            // Depth-limited analysis; the clock only guards runaway searches.
            Clock::movetime(Duration::from_secs(3600))
        };

        let res = self.searcher.think_to_depth(&self.pos, &clock, depth.unwrap_or(MAX_DEPTH));
        println!("info depth {} score cp {} nodes {}", res.depth, res.score, res.nodes);
        match res.best {
            Some(best) => println!("bestmove {best}"),
            None => println!("bestmove 0000"),
        }
    }

    pub fn run_loop(&mut self) {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(s) => s.trim().to_string(),
                Err(_) => break,
            };
            if line.is_empty() {
                continue;
            }
            if line == "uci" {
                self.cmd_uci();
                continue;
            }
            if line == "isready" {
                self.cmd_isready();
                continue;
            }
            if line == "ucinewgame" {
                self.cmd_ucinewgame();
                continue;
            }
            if line == "quit" {
                break;
            }
            if let Some(rest) = line.strip_prefix("position ") {
                self.cmd_position(rest);
                continue;
            }
            if let Some(rest) = line.strip_prefix("go") {
                self.cmd_go(rest.trim());
                continue;
            }
        }
    }
}
