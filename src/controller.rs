use rand::{Rng, rngs::StdRng};
use tokio::time::{Duration, sleep};
use tracing::debug;

use crate::{
    publisher::{PublishError, Publisher, Transport},
    reading::ReadingGenerator,
};

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Stopped,
}

/// Drives generate-publish-pause cycles until the first transport failure.
#[derive(Debug)]
pub struct Controller<T, R: Rng = StdRng> {
    generator: ReadingGenerator<R>,

    publisher: Publisher<T>,

    interval: Duration,

    state: State,

    cycles: u64,
}

impl<T: Transport, R: Rng> Controller<T, R> {
    pub fn new(generator: ReadingGenerator<R>, publisher: Publisher<T>) -> Self {
        Self {
            generator,
            publisher,
            interval: DEFAULT_INTERVAL,
            state: State::Running,
            cycles: 0,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Number of send attempts so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn publisher(&self) -> &Publisher<T> {
        &self.publisher
    }

    /// One reading, one message, one send. A transport error stops the controller.
    pub async fn cycle(&mut self) -> Result<u16, PublishError> {
        if self.state == State::Stopped {
            return Err(PublishError::Stopped);
        }

        let reading = self.generator.generate();
        self.cycles += 1;

        match self.publisher.publish(&reading).await {
            Ok(status) => Ok(status),
            Err(e) => {
                self.state = State::Stopped;
                debug!(cycles = self.cycles, "publish loop stopped");
                Err(e)
            }
        }
    }

    /// Runs until a cycle fails and returns the error that stopped it.
    pub async fn run(&mut self) -> PublishError {
        loop {
            if let Err(e) = self.cycle().await {
                return e;
            }

            sleep(self.interval).await;
        }
    }
}
