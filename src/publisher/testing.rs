use std::{
    collections::VecDeque,
    io,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use tokio::time::Instant;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

use crate::publisher::{OutgoingMessage, PublishError, Transport};

#[derive(Debug, Clone, Copy)]
pub enum Step {
    Status(u16),
    Fail(&'static str),
}

/// Plays back a fixed script of outcomes, then answers 200 forever.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Step>>,

    sent: Mutex<Vec<(Instant, OutgoingMessage)>>,
}

impl ScriptedTransport {
    pub fn new(script: impl IntoIterator<Item = Step>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Call `n` (1-based) answers with `step`; every other call answers 200.
    pub fn at_call(n: usize, step: Step) -> Self {
        let mut script = vec![Step::Status(200); n - 1];
        script.push(step);
        Self::new(script)
    }

    pub fn messages(&self) -> Vec<OutgoingMessage> {
        self.sent.lock().unwrap().iter().map(|(_, m)| m.clone()).collect()
    }

    pub fn sent_at(&self) -> Vec<Instant> {
        self.sent.lock().unwrap().iter().map(|(at, _)| *at).collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, message: &OutgoingMessage) -> Result<u16, PublishError> {
        self.sent
            .lock()
            .unwrap()
            .push((Instant::now(), message.clone()));

        match self.script.lock().unwrap().pop_front() {
            Some(Step::Status(status)) => Ok(status),
            Some(Step::Fail(description)) => Err(PublishError::Transport(description.to_string())),
            None => Ok(200),
        }
    }
}

/// Collects formatted trace output at the default `info` level.
#[derive(Clone, Default)]
pub struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    pub fn install(&self) -> DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.0.lock().unwrap())
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLog {
    type Writer = CapturedLog;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
