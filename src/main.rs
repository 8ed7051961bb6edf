/*
 * SPDX-FileCopyrightText: 2025 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{ensure, Context, Result};
use clap::Parser;
use parbfs::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Benchmarked (nodes, arcs) configurations, smallest first.
const CONFIGS: &[(usize, u64)] = &[
    (10, 50),
    (100, 500),
    (1_000, 5_000),
    (10_000, 50_000),
    (50_000, 1_000_000),
    (100_000, 1_000_000),
    (250_000, 250_000),
    (2_000_000, 10_000_000),
];

#[derive(Parser, Debug)]
#[command(name = "parbfs", about = "Benchmarks sequential and parallel breadth-first visits on random graphs.", long_about = None)]
struct CliArgs {
    /// The number of worker threads for the parallel visit.
    #[arg(short = 't', long, default_value_t = num_cpus::get())]
    threads: usize,

    /// The seed of the pseudorandom number generator.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Write a CSV report to this file.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Skip configurations with more nodes than this.
    #[arg(long, default_value_t = usize::MAX)]
    max_nodes: usize,
}

/// Milliseconds elapsed since `start`.
fn ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .try_init()?;
    let args = CliArgs::parse();

    let mut csv = match &args.csv {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Cannot create {}", path.display()))?;
            let mut csv = BufWriter::new(file);
            writeln!(csv, "v,e,buildtime,seqtime,partime,threads")?;
            Some(csv)
        }
        None => None,
    };

    for &(num_nodes, num_arcs) in CONFIGS {
        if num_nodes > args.max_nodes {
            continue;
        }
        let mut rng = SmallRng::seed_from_u64(args.seed);

        let start = Instant::now();
        let graph = random_digraph(&mut rng, num_nodes, num_arcs)?;
        let build_time = ms(start);

        let mut depths_seq = vec![0; num_nodes];
        let start = Instant::now();
        bfs(&graph, 0, &mut depths_seq);
        let seq_time = ms(start);

        let mut depths_par = vec![0; num_nodes];
        let start = Instant::now();
        parallel_bfs(args.threads, &graph, 0, &mut depths_par);
        let par_time = ms(start);

        ensure!(
            depths_seq == depths_par,
            "Sequential and parallel visits disagree on {} nodes / {} arcs",
            num_nodes,
            num_arcs
        );

        log::info!(
            "{} nodes / {} arcs: build {:.3} ms, seq {:.3} ms, par ({} threads) {:.3} ms ({})",
            num_nodes,
            num_arcs,
            build_time,
            seq_time,
            args.threads,
            par_time,
            if par_time < seq_time {
                "parallel wins"
            } else {
                "sequential wins"
            }
        );

        if let Some(csv) = &mut csv {
            writeln!(
                csv,
                "{},{},{},{},{},{}",
                num_nodes, num_arcs, build_time, seq_time, par_time, args.threads
            )?;
        }
    }

    Ok(())
}
