//! Demo sections for lazy sequence pipelines and eager collection operations
//!
//! [`run_demo`] writes ordered text lines to the given sink. Each section is a
//! self-contained walkthrough of one family of operations; the sequences
//! section drives the same stage chain lazily and eagerly so the difference in
//! side-effect interleaving shows up directly in the output.

use std::cell::RefCell;
use std::io::Write;

use seqpipe_core::Pipeline;
use seqpipe_ops::{self as ops, EagerPipeline};

/// Run every demo section against the given output sink
pub fn run_demo(out: &mut dyn Write) -> anyhow::Result<()> {
    sequences(out)?;
    generators(out)?;
    chunking(out)?;
    combining(out)?;
    filtering(out)?;
    conditions(out)?;
    Ok(())
}

/// Lazy pipeline vs eager chain over the classic word-length example
fn sequences(out: &mut dyn Write) -> anyhow::Result<()> {
    tracing::debug!("running sequences section");
    writeln!(out, "== lazy sequences vs eager collections ==")?;

    let words: Vec<String> = "the quick brown fox jumps over the lazy dog"
        .split(' ')
        .map(str::to_string)
        .collect();

    // Lazy: each word runs through filter and map back to back, and pulling
    // stops once four lengths have been produced.
    {
        let sink = RefCell::new(&mut *out);
        let mut lazy = Pipeline::of(words.clone())
            .try_filter(|word| {
                writeln!(sink.borrow_mut(), "lazy filter: {word}")?;
                Ok(word.len() > 3)
            })
            .try_map(|word| {
                writeln!(sink.borrow_mut(), "lazy map: {}", word.len())?;
                Ok(word.len())
            })
            .take(4)?;
        let lengths = lazy.collect()?;
        writeln!(
            sink.borrow_mut(),
            "lengths of the first 4 words longer than 3 chars: {lengths:?}"
        )?;
    }

    // Eager: the filter pass visits every word before the map pass starts.
    let log = RefCell::new(Vec::new());
    let lengths = EagerPipeline::of(words)
        .filter(|word| {
            log.borrow_mut().push(format!("eager filter: {word}"));
            word.len() > 3
        })
        .map(|word| {
            log.borrow_mut().push(format!("eager map: {}", word.len()));
            word.len()
        })
        .take(4)?
        .into_vec();
    for line in log.into_inner() {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "same lengths, computed eagerly: {lengths:?}")?;

    let mut days = Pipeline::of(vec!["monday", "tuesday", "wednesday"]).map(str::to_uppercase);
    days.try_for_each(|day| Ok(writeln!(out, "shouting: {day}")?))?;

    Ok(())
}

/// Generated sources: bounded by `take` or self-terminating
fn generators(out: &mut dyn Write) -> anyhow::Result<()> {
    tracing::debug!("running generators section");
    writeln!(out, "== generator sequences ==")?;

    let mut odds = Pipeline::generate(1, |n| Some(n + 2)).take(5)?;
    writeln!(out, "first five odd numbers: {:?}", odds.collect()?)?;

    let mut bounded = Pipeline::generate(1, |n| if *n < 9 { Some(n + 2) } else { None });
    writeln!(out, "self-terminating generator: {:?}", bounded.collect()?)?;

    bounded.reset()?;
    writeln!(out, "first element after reset: {:?}", bounded.first()?)?;

    Ok(())
}

/// Chunks, sliding windows, and flattening
fn chunking(out: &mut dyn Write) -> anyhow::Result<()> {
    tracing::debug!("running chunking section");
    writeln!(out, "== chunking and windowing ==")?;

    let faces = [":)", ":/", ":|", ":D", ":(", ":*"];
    writeln!(out, "chunked(3): {:?}", ops::chunked(&faces, 3)?)?;
    writeln!(out, "windowed(3): {:?}", ops::windowed(&faces, 3, 1, false)?)?;
    writeln!(
        out,
        "windowed(3, step 2, partial): {:?}",
        ops::windowed(&faces, 3, 2, true)?
    )?;
    writeln!(
        out,
        "chunked(3) then flattened: {:?}",
        ops::flatten(&ops::chunked(&faces, 3)?)
    )?;

    let names = ["mina", "theo"];
    let letters: Vec<char> = ops::flat_map(&names, |name| name.chars().collect());
    writeln!(out, "flat_map to letters: {letters:?}")?;

    Ok(())
}

/// Zipping, folding, and reducing
fn combining(out: &mut dyn Write) -> anyhow::Result<()> {
    tracing::debug!("running combining section");
    writeln!(out, "== combining ==")?;

    let names = ["mina", "theo", "ravi"];
    let ages = [29, 17, 41];
    let pairs = ops::zip(&names, &ages);
    writeln!(out, "zipped: {pairs:?}")?;
    writeln!(
        out,
        "zipped with transform: {:?}",
        ops::zip_with(&names, &ages, |name, age| format!("{name} is {age}"))
    )?;
    writeln!(out, "unzipped: {:?}", ops::unzip(&pairs))?;
    writeln!(
        out,
        "age gaps: {:?}",
        ops::zip_with_next(&ages, |a, b| a - b)
    )?;

    let numbers: Vec<i64> = (1..=10).collect();
    writeln!(
        out,
        "product by reduce: {}",
        ops::reduce(&numbers, |acc, n| acc * n)?
    )?;
    writeln!(
        out,
        "fold from 1: {}",
        ops::fold(&numbers, 1, |acc, n| n - acc)
    )?;
    writeln!(
        out,
        "running sum: {:?}",
        ops::running_fold(&[1, 2, 3, 4], 0, |acc, n| acc + n)
    )?;

    Ok(())
}

/// Partitioning and deduplication
fn filtering(out: &mut dyn Write) -> anyhow::Result<()> {
    tracing::debug!("running filtering section");
    writeln!(out, "== filtering ==")?;

    let numbers: Vec<i32> = (1..=10).collect();
    let (even, odd) = ops::partition(&numbers, |n| n % 2 == 0);
    writeln!(out, "even: {even:?}, odd: {odd:?}")?;

    let fruits = ["Apple", "Banana", "Apple", "APPLE", "BANANA", "Durian"];
    writeln!(out, "distinct: {:?}", ops::distinct(&fruits))?;
    writeln!(
        out,
        "distinct by lowercase: {:?}",
        ops::distinct_by(&fruits, |fruit| fruit.to_lowercase())
    )?;

    Ok(())
}

/// Collection-wide predicate checks
fn conditions(out: &mut dyn Write) -> anyhow::Result<()> {
    tracing::debug!("running conditions section");
    writeln!(out, "== conditions ==")?;

    struct Crewmate {
        name: &'static str,
        age: u32,
        licensed: bool,
    }

    let crew = [
        Crewmate {
            name: "mina",
            age: 29,
            licensed: true,
        },
        Crewmate {
            name: "theo",
            age: 17,
            licensed: false,
        },
        Crewmate {
            name: "ravi",
            age: 41,
            licensed: true,
        },
    ];

    writeln!(
        out,
        "someone can drive: {}",
        ops::any(&crew, |member| member.licensed)
    )?;
    writeln!(
        out,
        "no one is unnamed: {}",
        ops::none(&crew, |member| member.name.is_empty())
    )?;
    writeln!(
        out,
        "everyone is an adult: {}",
        ops::all(&crew, |member| member.age >= 18)
    )?;

    Ok(())
}
