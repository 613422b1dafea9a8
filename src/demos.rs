//! The named example routines. Each one records a deterministic trace.

use crate::error::{Error, Result};
use crate::nullable::Nullable;
use crate::pipeline::{self, ExtractMode};
use crate::settings::Settings;
use crate::trace::Trace;
use itertools::Itertools;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Demo {
    Construction,
    Problem,
    Solution,
    EagerFallback,
    LazyFallback,
    FailOnAbsence,
    Manual,
    Main,
}

impl Demo {
    pub const ALL: [Demo; 8] = [
        Demo::Construction,
        Demo::Problem,
        Demo::Solution,
        Demo::EagerFallback,
        Demo::LazyFallback,
        Demo::FailOnAbsence,
        Demo::Manual,
        Demo::Main,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Demo::Construction => "ex00",
            Demo::Problem => "ex01",
            Demo::Solution => "ex02",
            Demo::EagerFallback => "ex03",
            Demo::LazyFallback => "ex04",
            Demo::FailOnAbsence => "ex05",
            Demo::Manual => "ex06",
            Demo::Main => "main",
        }
    }

    pub fn title(self) -> String {
        match self {
            Demo::Main => "Main pipeline".to_string(),
            other => format!("Example #{}", other.name().trim_start_matches("ex0")),
        }
    }

    pub fn run(self, settings: &Settings, trace: &Trace) -> Result<()> {
        trace.header(self.title());
        match self {
            Demo::Construction => construction(trace)?,
            Demo::Problem => problem(trace),
            Demo::Solution => solution(settings, trace),
            Demo::EagerFallback => eager_fallback(settings, trace)?,
            Demo::LazyFallback => lazy_fallback(settings, trace)?,
            Demo::FailOnAbsence => fail_on_absence(settings, trace)?,
            Demo::Manual => manual(trace)?,
            Demo::Main => main_pipeline(settings, trace),
        }
        trace.separator();
        Ok(())
    }
}

impl FromStr for Demo {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Demo::ALL
            .iter()
            .copied()
            .find(|demo| demo.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known = Demo::ALL.iter().map(|d| d.name()).join(", ");
                Error::UnknownDemo(s.to_string(), known)
            })
    }
}

// =============================================================================
// Example #0: ways of constructing a container
// =============================================================================

fn construction(trace: &Trace) -> Result<()> {
    let s1 = Some("Definitely not null value");
    let s2 = Some("Possibly nullable");
    let s3: Option<&str> = None;

    let opt1 = Nullable::try_present(s1)?;
    let opt2 = Nullable::<&str>::empty();
    let opt3 = Nullable::from_nullable(s2);
    let opt4 = Nullable::from_nullable(s3);

    trace.value(format!("present(s1)       = {}", opt1));
    trace.value(format!("empty()           = {}", opt2));
    trace.value(format!("from_nullable(s2) = {}", opt3));
    trace.value(format!("from_nullable(s3) = {}", opt4));

    // present() refuses an absent input outright
    if let Err(err) = Nullable::try_present(s3) {
        trace.note(format!("present(s3)       -> {}", err));
    }
    Ok(())
}

// =============================================================================
// Example #1: the problem, hand-written absence checks
// =============================================================================

fn problem(trace: &Trace) {
    for entry in pipeline::sample_sequence() {
        if let Some(s) = entry {
            trace.value(s);
        }
    }
}

// =============================================================================
// Example #2: the solution, wrap and let combinators skip absent entries
// =============================================================================

fn solution(settings: &Settings, trace: &Trace) {
    pipeline::collect_present_formatted(pipeline::sample_sequence(), settings)
        .for_each(|s| trace.value(s));
}

// =============================================================================
// Example #3 and #4: eager vs lazy fallbacks
// =============================================================================

fn eager_fallback(settings: &Settings, trace: &Trace) -> Result<()> {
    let eager = || {
        trace.call("call: eager()");
        settings.eager_fallback.clone()
    };
    for value in pipeline::extract_with_fallback(
        pipeline::sample_sequence(),
        settings,
        ExtractMode::Eager(eager),
    ) {
        trace.value(value?);
    }
    Ok(())
}

fn lazy_fallback(settings: &Settings, trace: &Trace) -> Result<()> {
    let lazy = || {
        trace.call("call: lazy()");
        settings.lazy_fallback.clone()
    };
    for value in pipeline::extract_with_fallback(
        pipeline::sample_sequence(),
        settings,
        ExtractMode::Lazy(lazy),
    ) {
        trace.value(value?);
    }
    Ok(())
}

// =============================================================================
// Example #5: fail on the first absent entry
// =============================================================================

fn fail_on_absence(settings: &Settings, trace: &Trace) -> Result<()> {
    let mode = ExtractMode::fail(settings.absent_message.as_str());
    for value in pipeline::extract_with_fallback(pipeline::sample_sequence(), settings, mode) {
        match value {
            Ok(s) => trace.value(s),
            Err(err) => {
                trace.error(format!("raised: {}", err));
                return Err(err);
            }
        }
    }
    Ok(())
}

// =============================================================================
// Example #6: consuming a container by hand
// =============================================================================

fn manual(trace: &Trace) -> Result<()> {
    let opt1 = Nullable::present("yes");
    let opt2 = Nullable::<&str>::empty();

    opt1.if_present(|s| trace.value(*s));
    opt2.if_present(|s| trace.value(*s));

    if opt1.is_present() {
        trace.value(opt1.get()?);
    }
    if opt2.is_present() {
        trace.value(opt2.get()?);
    }
    Ok(())
}

// =============================================================================
// Main: filter present, unwrap, bullet
// =============================================================================

fn main_pipeline(settings: &Settings, trace: &Trace) {
    pipeline::collect_present_bulleted(pipeline::sample_sequence(), settings)
        .for_each(|s| trace.value(s));
}

// =============================================================================
// Tests
// =============================================================================
