//! Host simulator for the voting terminal.
//!
//! Stands in for the device front end: keys come from stdin (digits, `*`,
//! `#`, one or more per line), the EEPROM is a file-backed image, screens
//! are printed to the terminal, and the indicator panel and tone generator
//! are rendered as log lines.

use std::io::BufRead;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use ballotbox_core::{
    app::{TerminalApp, TerminalConfig, TickResult},
    input::{InputProvider, Key},
};
use log::info;

#[path = "main/eeprom.rs"]
mod eeprom;
#[path = "main/screens.rs"]
mod screens;

use eeprom::FileStore;
use screens::{LogPanel, LogTone, print_screen};

const TICK_INTERVAL: Duration = Duration::from_millis(20);
const DEFAULT_IMAGE_PATH: &str = "ballotbox.eeprom";

/// Stdin characters mapped to key symbols, fed through a channel so the
/// tick loop never blocks on the terminal.
struct StdinKeys {
    rx: mpsc::Receiver<Key>,
}

impl StdinKeys {
    fn spawn() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                for c in line.chars() {
                    let key = match c {
                        '*' => Key::Star,
                        '#' => Key::Hash,
                        d if d.is_ascii_digit() => Key::Digit(d as u8 - b'0'),
                        _ => continue,
                    };
                    if tx.send(key).is_err() {
                        return;
                    }
                }
            }
        });
        Self { rx }
    }
}

impl InputProvider for StdinKeys {
    type Error = ();

    fn poll_key(&mut self, _now_ms: u64) -> Result<Option<Key>, Self::Error> {
        match self.rx.try_recv() {
            Ok(key) => Ok(Some(key)),
            Err(mpsc::TryRecvError::Empty) => Ok(None),
            Err(mpsc::TryRecvError::Disconnected) => Err(()),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let image_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_IMAGE_PATH.to_string());

    let store = match FileStore::open(&image_path) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("cannot open EEPROM image {image_path}: {err}");
            std::process::exit(1);
        }
    };
    info!("EEPROM image: {image_path}");

    let mut app = match TerminalApp::new(
        store,
        StdinKeys::spawn(),
        LogPanel,
        LogTone,
        TerminalConfig::default(),
    ) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("cannot load election state: {err:?}");
            std::process::exit(1);
        }
    };

    println!("ballotbox simulator: type keys (0-9, *, #) and press enter");

    let started = Instant::now();
    loop {
        let now_ms = started.elapsed().as_millis() as u64;
        match app.tick(now_ms) {
            TickResult::RenderRequested => print_screen(&app.screen()),
            TickResult::NoRender => {}
        }
        thread::sleep(TICK_INTERVAL);
    }
}
