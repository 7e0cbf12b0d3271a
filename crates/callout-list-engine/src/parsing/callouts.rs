use crate::models::CalloutBlock;

/// Line scanner state: either between blocks or buffering the current
/// quoted run.
///
/// A `>[!` line opens a block; every following `>`-prefixed line continues
/// it; the first non-quote line closes it. A `>[!` line seen while already
/// inside a block does not open a nested block, it is appended like any
/// other quote line.
#[derive(Debug, Default)]
struct CalloutScanner {
    buffer: Vec<String>,
    in_block: bool,
}

impl CalloutScanner {
    /// Feed one line, returning the block it closed, if any.
    fn push(&mut self, line: &str) -> Option<CalloutBlock> {
        if line.starts_with(CalloutBlock::OPENING_PREFIX) {
            self.in_block = true;
        }
        if !self.in_block {
            return None;
        }
        if line.starts_with(CalloutBlock::QUOTE_PREFIX) {
            self.buffer.push(line.to_string());
            return None;
        }
        self.in_block = false;
        CalloutBlock::from_lines(std::mem::take(&mut self.buffer))
    }

    // A still-open block at end of input is dropped, never flushed; the
    // tests below pin this behavior.
}

/// Extract the callout blocks of one note, in document order.
///
/// `allowed_kinds` is an allow-list of callout types; empty means every
/// well-formed block is kept. With a non-empty list, a block whose header
/// is malformed (no extractable kind) never matches.
pub fn parse_callouts(text: &str, allowed_kinds: &[String]) -> Vec<CalloutBlock> {
    let mut scanner = CalloutScanner::default();
    let mut blocks = Vec::new();

    for line in text.split('\n') {
        if let Some(block) = scanner.push(line)
            && kind_allowed(&block, allowed_kinds)
        {
            blocks.push(block);
        }
    }

    blocks
}

fn kind_allowed(block: &CalloutBlock, allowed_kinds: &[String]) -> bool {
    if allowed_kinds.is_empty() {
        return true;
    }
    match block.kind() {
        Some(kind) => allowed_kinds.iter().any(|k| k == kind),
        None => false,
    }
}
