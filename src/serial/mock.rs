// src/serial/mock.rs
//
// In-memory serial connector for tests. Replies follow a script and the
// connector records what was written, the read timeouts requested, and
// whether the port was dropped.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, Read, Write};
use std::rc::Rc;
use std::time::Duration;

use super::settings::PortSettings;
use super::transport::{SerialConnector, SerialLink};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Fault {
    None,
    Open,
    Write,
    Read,
}

/// What the fake device does once the payload is written.
#[derive(Clone, Debug)]
pub(crate) struct Script {
    /// Each chunk becomes readable `delay` after the previous read returns.
    chunks: Vec<(Duration, Vec<u8>)>,
    fault: Fault,
}

impl Script {
    /// Reply with `bytes` in one read, then time out.
    pub(crate) fn reply(bytes: &[u8]) -> Self {
        Self::chunks(&[bytes])
    }

    /// Reply across several reads, then time out.
    pub(crate) fn chunks(chunks: &[&[u8]]) -> Self {
        Self::slow(Duration::ZERO, chunks)
    }

    /// Like `chunks`, but each chunk arrives `delay` after the last.
    pub(crate) fn slow(delay: Duration, chunks: &[&[u8]]) -> Self {
        Self {
            chunks: chunks.iter().map(|c| (delay, c.to_vec())).collect(),
            fault: Fault::None,
        }
    }

    /// Never reply.
    pub(crate) fn timeout() -> Self {
        Self::chunks(&[])
    }

    pub(crate) fn open_fails() -> Self {
        Self { fault: Fault::Open, ..Self::timeout() }
    }

    pub(crate) fn write_fails() -> Self {
        Self { fault: Fault::Write, ..Self::timeout() }
    }

    pub(crate) fn read_fails() -> Self {
        Self { fault: Fault::Read, ..Self::timeout() }
    }
}

#[derive(Debug, Default)]
struct Shared {
    opened_as: Option<String>,
    written: Vec<u8>,
    timeouts: Vec<Duration>,
    closed: bool,
}

pub(crate) struct MockConnector {
    script: Script,
    shared: Rc<RefCell<Shared>>,
}

impl MockConnector {
    pub(crate) fn new(script: Script) -> Self {
        Self {
            script,
            shared: Rc::new(RefCell::new(Shared::default())),
        }
    }

    pub(crate) fn opened_as(&self) -> Option<String> {
        self.shared.borrow().opened_as.clone()
    }

    pub(crate) fn written(&self) -> Vec<u8> {
        self.shared.borrow().written.clone()
    }

    /// Read timeouts set on the port, in order.
    pub(crate) fn timeouts(&self) -> Vec<Duration> {
        self.shared.borrow().timeouts.clone()
    }

    pub(crate) fn closed(&self) -> bool {
        self.shared.borrow().closed
    }
}

impl SerialConnector for MockConnector {
    type Port = MockPort;

    fn open(&self, port: &str, settings: &PortSettings) -> Result<MockPort, serialport::Error> {
        if self.script.fault == Fault::Open {
            return Err(serialport::Error::new(
                serialport::ErrorKind::NoDevice,
                format!("no such device: {}", port),
            ));
        }
        self.shared.borrow_mut().opened_as = Some(port.to_string());
        Ok(MockPort {
            pending: self.script.chunks.iter().cloned().collect(),
            timeout: settings.timeout,
            fault: self.script.fault,
            shared: Rc::clone(&self.shared),
        })
    }
}

pub(crate) struct MockPort {
    pending: VecDeque<(Duration, Vec<u8>)>,
    timeout: Duration,
    fault: Fault,
    shared: Rc<RefCell<Shared>>,
}

fn timed_out() -> io::Error {
    io::Error::new(io::ErrorKind::TimedOut, "Operation timed out")
}

impl Read for MockPort {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.fault == Fault::Read {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "device unplugged"));
        }
        let Some((delay, mut chunk)) = self.pending.pop_front() else {
            return Err(timed_out());
        };
        if delay > self.timeout {
            // Blocks for the whole timeout; the chunk is still on its way
            std::thread::sleep(self.timeout);
            self.pending.push_front((delay - self.timeout, chunk));
            return Err(timed_out());
        }
        std::thread::sleep(delay);
        let n = chunk.len().min(buf.len());
        buf[..n].copy_from_slice(&chunk[..n]);
        if n < chunk.len() {
            self.pending.push_front((Duration::ZERO, chunk.split_off(n)));
        }
        Ok(n)
    }
}

impl Write for MockPort {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.fault == Fault::Write {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "device unplugged"));
        }
        self.shared.borrow_mut().written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SerialLink for MockPort {
    fn set_read_timeout(&mut self, timeout: Duration) -> io::Result<()> {
        self.timeout = timeout;
        self.shared.borrow_mut().timeouts.push(timeout);
        Ok(())
    }
}

impl Drop for MockPort {
    fn drop(&mut self) {
        self.shared.borrow_mut().closed = true;
    }
}
