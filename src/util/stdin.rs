use std::io::{IsTerminal, Read};

/// Returns piped stdin as text. An interactive terminal yields an empty
/// string without reading anything; so does any read failure, invalid
/// UTF-8 included.
pub fn read_piped_input() -> String {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return String::new();
    }
    drain(stdin.lock())
}

fn drain(mut source: impl Read) -> String {
    let mut text = String::new();
    match source.read_to_string(&mut text) {
        Ok(n) => {
            log::debug!("drained {} bytes from stdin", n);
            text
        }
        Err(e) => {
            log::debug!("stdin not readable: {:?}", e);
            String::new()
        }
    }
}
