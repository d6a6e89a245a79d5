use std::fs::{self, File};
use std::io::Write;
use std::time::Instant;

use crate::board::Board;
use crate::types::Color;

/// Buffered game log. The board itself never logs; embedders feed this
/// from the outside and flush it to disk when a game ends.
#[derive(Debug)]
pub struct GameLogger {
    pub log_buffer: String,
    game_start_time: Instant,
    move_count: u32,
}

impl GameLogger {
    pub fn new() -> Self {
        let mut logger = Self {
            log_buffer: String::with_capacity(64 * 1024),
            game_start_time: Instant::now(),
            move_count: 0,
        };

        logger.log("=== Game log started ===");
        logger.log(&format!(
            "Date: {}",
            chrono::Local::now().format("%m/%d/%Y %H:%M:%S")
        ));
        logger
    }

    pub fn log(&mut self, message: &str) {
        self.log_buffer.push_str(message);
        self.log_buffer.push('\n');
    }

    /// Records one executed move with its elapsed game time.
    pub fn log_move(&mut self, notation: &str) {
        self.move_count += 1;
        let elapsed = self.game_start_time.elapsed().as_millis();
        self.log(&format!("{}. {} ({}ms)", self.move_count, notation, elapsed));
    }

    /// Snapshot of the board's headline state.
    pub fn log_board(&mut self, board: &Board) {
        for color in [Color::White, Color::Black] {
            let count = board.pieces_by_color(color).count();
            self.log(&format!("{:?}: {} active pieces", color, count));
        }
        if let Some(window) = board.en_passant_window() {
            self.log(&format!(
                "En passant window: ({}, {})",
                window.rank, window.file
            ));
        }
        if let Some(checker) = board.check() {
            self.log(&format!("Check from: ({}, {})", checker.rank, checker.file));
        }
        self.log(&format!("Board revision: {}", board.revision()));
    }

    /// Flushes the buffer into a timestamped file under `logs/` and
    /// returns the path written.
    pub fn save_to_file(&mut self, reason: &str) -> Result<String, String> {
        if let Err(e) = fs::create_dir_all("logs") {
            return Err(format!("Failed to create logs directory: {}", e));
        }

        let filename = format!(
            "logs/game_{}.log",
            chrono::Local::now().format("%Y%m%d_%H%M%S")
        );
        self.log(&format!("=== Log saved: {} ===", reason));

        match File::create(&filename) {
            Ok(mut file) => {
                if let Err(e) = file.write_all(self.log_buffer.as_bytes()) {
                    return Err(format!("Failed to write log: {}", e));
                }
                Ok(filename)
            }
            Err(e) => Err(format!("Failed to create log file: {}", e)),
        }
    }
}

impl Default for GameLogger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_accumulates_lines() {
        let mut logger = GameLogger::new();
        let header_len = logger.log_buffer.len();

        logger.log("hello");
        logger.log_move("g5-f5");
        logger.log_move("b2-c2");

        let body = &logger.log_buffer[header_len..];
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "hello");
        assert!(lines[1].starts_with("1. g5-f5"));
        assert!(lines[2].starts_with("2. b2-c2"));
    }

    #[test]
    fn test_log_board_reports_counts() {
        let mut logger = GameLogger::new();
        let board = Board::new();

        logger.log_board(&board);
        assert!(logger.log_buffer.contains("White: 16 active pieces"));
        assert!(logger.log_buffer.contains("Black: 16 active pieces"));
    }
}
