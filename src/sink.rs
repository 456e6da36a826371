/// Receives finished display lines one at a time, in emission order.
///
/// The formatting engine never buffers a whole result; each line is pushed
/// as soon as it is finalized so a host panel can stream them in. Sinks
/// cannot fail.
pub trait LineSink {
    fn push_line(&mut self, line: &str);
}

/// Collecting sink used by the CLI and by tests.
impl LineSink for Vec<String> {
    fn push_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}
