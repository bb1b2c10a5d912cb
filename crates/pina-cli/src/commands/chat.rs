//! Interactive Pine-Bot chat on stdin/stdout.

use std::io::{BufRead, Write};

use anyhow::Result;

use pina_application::ChatSession;
use pina_infrastructure::ConfigService;

pub fn run() -> Result<()> {
    let config = ConfigService::at_default_path()?.get_config();
    let mut chat = ChatSession::with_config(&config);

    for message in chat.messages() {
        println!("pine-bot> {}", message.text);
    }
    println!("(type a question, or an empty line to quit)");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        print!("you> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if let Some(reply) = chat.send(line) {
            println!("pine-bot> {reply}");
        }
    }

    Ok(())
}
