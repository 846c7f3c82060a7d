use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Environment variable that disables paging when set
pub const NO_PAGER_ENV: &str = "NO_PAGER";

/// Adapter implementing `Write` for the minus pager
///
/// The pager shows text, so bytes that are not UTF-8 are shown as U+FFFD; the
/// plain stdout path keeps them.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Destination of command output: plain stdout, or a pager shown once the
/// command has written everything
pub enum Output {
    Stdout,
    Pager(Pager),
}

impl Output {
    /// Page only when asked to, when stdout is a terminal, and when
    /// `NO_PAGER` is not set
    pub fn detect(paging: bool) -> Self {
        if paging && io::stdout().is_terminal() && std::env::var_os(NO_PAGER_ENV).is_none() {
            Output::Pager(Pager::new())
        } else {
            Output::Stdout
        }
    }

    pub fn writer(&self) -> Box<dyn Write + Send> {
        match self {
            Output::Stdout => Box::new(io::stdout()),
            Output::Pager(pager) => Box::new(PagerWriter::new(pager.clone())),
        }
    }

    pub fn finish(self) -> anyhow::Result<()> {
        match self {
            Output::Stdout => Ok(()),
            Output::Pager(pager) => Ok(minus::page_all(pager)?),
        }
    }
}
