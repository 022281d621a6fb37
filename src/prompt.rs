//! Line-based interactive questions.
//!
//! Every question holds exclusive access to the input stream only while it
//! waits for one line; answers are trimmed before being returned.
use std::io::{self, BufRead, IsTerminal as _, Write};
use std::sync::Mutex;

use crate::error::InstallError;

/// Asks the user questions and returns normalized answers.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Ask a free-text question and return the trimmed answer.
    ///
    /// An empty submission (or end of input) yields an empty string; the
    /// caller decides whether that is acceptable.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError::Prompt`] if the input stream cannot be read.
    fn ask_text(&self, question: &str) -> Result<String, InstallError>;

    /// Ask a yes/no question.
    ///
    /// Only "y" and "yes" (any case, surrounding whitespace ignored) count
    /// as yes. Anything else, including a typo, is no. There is no re-prompt.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError::Prompt`] if the input stream cannot be read.
    fn ask_yes_no(&self, question: &str) -> Result<bool, InstallError> {
        Ok(is_yes(&self.ask_text(question)?))
    }
}

/// Lowercase and trim an answer.
#[must_use]
pub fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Whether `answer` is an affirmative reply.
///
/// ```
/// use speckit_installer::prompt::is_yes;
///
/// assert!(is_yes(" Yes "));
/// assert!(is_yes("y"));
/// assert!(!is_yes("yse"));
/// assert!(!is_yes(""));
/// ```
#[must_use]
pub fn is_yes(answer: &str) -> bool {
    matches!(normalize(answer).as_str(), "y" | "yes")
}

/// Write `question`, flush, and read one line from `reader`.
fn ask_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    question: &str,
    color: bool,
) -> io::Result<String> {
    if color {
        write!(writer, "\x1b[36m{question}\x1b[0m ")?;
    } else {
        write!(writer, "{question} ")?;
    }
    writer.flush()?;

    let mut input = String::new();
    reader.read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Prompter bound to the process's standard input and output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdioPrompter;

impl Prompter for StdioPrompter {
    fn ask_text(&self, question: &str) -> Result<String, InstallError> {
        let mut input = io::stdin().lock();
        let mut output = io::stdout().lock();
        let color = output.is_terminal();
        ask_line(&mut input, &mut output, question, color).map_err(InstallError::Prompt)
    }
}

/// Prompter over an arbitrary reader and writer.
///
/// Used to feed scripted answers without a terminal. Once the reader is
/// exhausted every further question receives an empty answer.
#[derive(Debug)]
pub struct LinePrompter<R, W> {
    io: Mutex<(R, W)>,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    /// Create a prompter reading answers from `reader` and writing
    /// questions to `writer`.
    pub const fn new(reader: R, writer: W) -> Self {
        Self {
            io: Mutex::new((reader, writer)),
        }
    }
}

impl LinePrompter<io::Cursor<Vec<u8>>, Vec<u8>> {
    /// Create a prompter that answers each question with the next entry of
    /// `answers`.
    #[must_use]
    pub fn scripted(answers: &[&str]) -> Self {
        let mut script = answers.join("\n");
        script.push('\n');
        Self::new(io::Cursor::new(script.into_bytes()), Vec::new())
    }

    /// Everything written to the output so far.
    #[must_use]
    pub fn transcript(&self) -> String {
        let guard = self
            .io
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        String::from_utf8_lossy(&guard.1).into_owned()
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask_text(&self, question: &str) -> Result<String, InstallError> {
        let mut guard = self
            .io
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let (reader, writer) = &mut *guard;
        ask_line(reader, writer, question, false).map_err(InstallError::Prompt)
    }
}
