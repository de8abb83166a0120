use std::io;

use td::output::{Console, Style};

/// Console double: replays canned input lines and records every styled line
/// the loop writes, so tests can assert on both sides of the conversation.
pub struct ScriptedConsole {
    input: Vec<String>,
    pub lines: Vec<(Style, String)>,
    pub prompts: Vec<String>,
    pub pauses: usize,
}

#[allow(dead_code)]
impl ScriptedConsole {
    pub fn new(input: &[&str]) -> Self {
        Self {
            input: input.iter().rev().map(|line| line.to_string()).collect(),
            lines: Vec::new(),
            prompts: Vec::new(),
            pauses: 0,
        }
    }

    /// All rendered text, one line per entry, styles dropped.
    pub fn rendered(&self) -> Vec<&str> {
        self.lines.iter().map(|(_, text)| text.as_str()).collect()
    }

    /// Only the lines rendered in `style`.
    pub fn styled(&self, style: Style) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(s, _)| *s == style)
            .map(|(_, text)| text.as_str())
            .collect()
    }

    pub fn saw_line(&self, needle: &str) -> bool {
        self.lines.iter().any(|(_, text)| text.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn line(&mut self, style: Style, text: &str) -> io::Result<()> {
        self.lines.push((style, text.to_string()));
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.input.pop())
    }

    fn wait_for_key(&mut self) -> io::Result<()> {
        self.pauses += 1;
        Ok(())
    }
}
