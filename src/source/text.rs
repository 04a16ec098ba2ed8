//! Pre-extracted text source

use super::LineSource;
use crate::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Streams lines from a text file, or stdin when the path is `-`
#[derive(Debug, Clone)]
pub struct TextFileSource {
    path: PathBuf,
}

impl TextFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_stdin(&self) -> bool {
        self.path == Path::new("-")
    }
}

#[async_trait]
impl LineSource for TextFileSource {
    fn describe(&self) -> String {
        if self.is_stdin() {
            "standard input".to_string()
        } else {
            format!("text file {:?}", self.path)
        }
    }

    async fn for_each_line(&self, f: &mut (dyn for<'a> FnMut(&'a str) -> Result<()> + Send)) -> Result<u64> {
        let reader: Box<dyn AsyncBufRead + Unpin + Send> = if self.is_stdin() {
            Box::new(BufReader::new(tokio::io::stdin()))
        } else {
            Box::new(BufReader::new(tokio::fs::File::open(&self.path).await?))
        };

        let mut lines = reader.lines();
        let mut count = 0;
        while let Some(line) = lines.next_line().await? {
            count += 1;
            f(&line)?;
        }

        tracing::debug!("Read {} lines from {}", count, self.describe());
        Ok(count)
    }
}
