//! Sorting routine backed by an external process.
//!
//! The buffer goes to the child's stdin as decimal integers, one per line.
//! The child must print the same number of integers on stdout and exit 0.

use std::io::{self, BufWriter, Read, Write};
use std::process::{ChildStdin, Command, Stdio};
use std::thread;

use tracing::debug;
use vs_harness::{RoutineError, SortRoutine};

/// A program that sorts integers read from stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalRoutine {
    program: String,
    args: Vec<String>,
    label: String,
}

impl ExternalRoutine {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        let program = program.into();
        let label = std::iter::once(program.as_str())
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            program,
            args,
            label: format!("cmd:{label}"),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

fn write_values(stdin: ChildStdin, values: &[i32]) -> io::Result<()> {
    let mut writer = BufWriter::new(stdin);
    for v in values {
        writeln!(writer, "{v}")?;
    }
    writer.flush()
}

fn parse_values(output: &[u8]) -> Result<Vec<i32>, RoutineError> {
    let mut values = Vec::new();
    for (i, raw) in output.split(|&b| b == b'\n').enumerate() {
        let value = match std::str::from_utf8(raw).map(str::trim) {
            Ok("") => continue,
            Ok(line) => line.parse::<i32>().ok(),
            Err(_) => None,
        };
        let value = value.ok_or_else(|| RoutineError::Parse {
            line: i + 1,
            value: String::from_utf8_lossy(raw).trim().to_string(),
        })?;
        values.push(value);
    }
    Ok(values)
}

impl SortRoutine for ExternalRoutine {
    fn sort(&self, data: &mut [i32]) -> Result<(), RoutineError> {
        debug!(program = %self.program, len = data.len(), "spawning external routine");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| io::Error::other("child stdin unavailable"))?;
        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::other("child stdout unavailable"))?;

        // Feed stdin from a second thread so a child that streams output
        // before consuming all input cannot deadlock on a full pipe.
        let input: &[i32] = data;
        let mut output = Vec::new();
        let piped = thread::scope(|s| -> io::Result<()> {
            let writer = s.spawn(move || write_values(stdin, input));
            let read = stdout.read_to_end(&mut output);
            match writer.join() {
                Ok(Ok(())) => {}
                // The child stopped reading; its output decides the verdict.
                Ok(Err(e)) if e.kind() == io::ErrorKind::BrokenPipe => {}
                Ok(Err(e)) => return Err(e),
                Err(_) => return Err(io::Error::other("stdin writer panicked")),
            }
            read.map(|_| ())
        });

        // Always reap the child, even when the pipes failed.
        if piped.is_err() {
            let _ = child.kill();
        }
        let status = child.wait();
        piped?;
        let status = status?;
        if !status.success() {
            return Err(RoutineError::Exited(status));
        }

        let values = parse_values(&output)?;
        if values.len() != data.len() {
            return Err(RoutineError::LengthChanged {
                expected: data.len(),
                actual: values.len(),
            });
        }
        data.copy_from_slice(&values);
        Ok(())
    }

    fn name(&self) -> &str {
        &self.label
    }
}
