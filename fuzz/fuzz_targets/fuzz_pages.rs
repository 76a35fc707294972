#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pagewise::{BufferedIter, IterOptions, PageSource, VecPages};

#[derive(Debug, Arbitrary)]
struct Input {
    items: Vec<u16>,
    /// Page sizes, cycled; `0` asks for everything that fits.
    pages: Vec<u8>,
    /// Scratch capacity handed to `with_scratch`.
    scratch: u8,
    default_capacity: u8,
    /// Fail on this (1-based) call, if set.
    fail_on: Option<u8>,
    /// Extra `advance()` calls after termination.
    extra: u8,
}

#[derive(Debug, PartialEq)]
struct Injected;

impl std::fmt::Display for Injected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("injected")
    }
}

struct Script {
    items: VecPages<u16>,
    pages: Vec<u8>,
    fail_on: Option<usize>,
    calls: usize,
    served: usize,
    done: bool,
}

impl PageSource<u16> for Script {
    type Error = Injected;

    fn fetch(&mut self, scratch: &mut [u16]) -> Result<usize, Injected> {
        assert!(!self.done, "source called after it signalled the end");
        self.calls += 1;
        if Some(self.calls) == self.fail_on {
            self.done = true;
            return Err(Injected);
        }
        let limit = match self.pages.get((self.calls - 1) % self.pages.len().max(1)) {
            Some(&0) | None => scratch.len(),
            Some(&n) => usize::from(n).min(scratch.len()),
        };
        let Ok(n) = self.items.fetch(&mut scratch[..limit]);
        self.served += n;
        if n == 0 {
            self.done = true;
        }
        Ok(n)
    }
}

fuzz_target!(|input: Input| {
    let source = Script {
        items: VecPages::new(input.items.clone()),
        pages: input.pages,
        fail_on: input.fail_on.map(usize::from),
        calls: 0,
        served: 0,
        done: false,
    };
    let mut it = BufferedIter::with_scratch(
        source,
        Vec::with_capacity(usize::from(input.scratch)),
        IterOptions {
            default_capacity: usize::from(input.default_capacity),
        },
    );

    let mut seen = Vec::new();
    while it.advance() {
        seen.push(*it.current());
        assert!(it.pending().len() < it.capacity());
    }
    let status = it.status();
    for _ in 0..input.extra {
        assert!(!it.advance());
        assert!(it.try_current().is_err());
        assert_eq!(it.status(), status);
    }

    let failed = it.error().is_some();
    let source = it.into_source();
    assert_eq!(seen, input.items[..source.served]);
    if !failed {
        assert_eq!(seen, input.items);
    }
});
