mod editor;
mod logger;
mod machine;
mod monitor;

use anyhow::Result;

use editor::RustylineEditor;
use machine::DemoMachine;
use monitor::{Mode, Monitor};

fn main() -> Result<()> {
    let mut mode = Mode::Interactive;
    let mut log_path: Option<String> = None;
    let mut image: Option<String> = None;

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--batch" | "-b" => mode = Mode::Batch,
            "--log" => match iter.next() {
                Some(path) => log_path = Some(path),
                None => usage(),
            },
            "--mem" => match iter.next() {
                Some(path) => image = Some(path),
                None => usage(),
            },
            _ => usage(),
        }
    }

    if let Some(path) = &log_path {
        logger::global().open(path)?;
    }

    let mut machine = DemoMachine::new();
    if let Some(path) = &image {
        let loaded = machine.load_image(path)?;
        println!("loaded {} bytes from {}", loaded, path);
    }

    let mut editor = RustylineEditor::new()?;
    let mut monitor = Monitor::new(&mut machine);
    monitor.run(mode, &mut editor)
}

fn usage() -> ! {
    eprintln!("usage: simmon [--batch|-b] [--log <path>] [--mem <image>]");
    std::process::exit(1);
}
