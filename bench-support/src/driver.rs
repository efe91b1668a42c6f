//! Timing driver.
//!
//! A [`Campaign`] measures one graph: it owns the value pool of one element
//! type and records into a borrowed [`Report`].
//!
//! ```text
//!   for size in sizes:
//!       repeat times:
//!           target = setup.make(size, pool)        untimed
//!           t0 = now
//!           outcome = op.run(&mut target, size)    timed
//!           t1 = now
//!           drop(target)                           untimed
//!       report.new_result(label, size, avg(t1 - t0) in unit)
//!   setup.clean(pool)
//! ```
//!
//! If any trial of a size is not applicable the size gets no sample, and
//! the remaining trials of that size are skipped.

use std::time::{Duration, Instant};

use seqbench::cache::ValuePool;
use seqbench::element::Element;
use seqbench::policy::{Operation, Setup};
use seqbench::traits::SequenceContainer;
use tracing::debug;

use crate::report::{Report, TimeUnit};

pub struct Campaign<'r, T: Element> {
    report: &'r mut Report,
    pool: ValuePool<T>,
    repeat: usize,
    unit: TimeUnit,
    benches: usize,
}

impl<'r, T: Element> Campaign<'r, T> {
    /// Creates a campaign averaging `repeat` trials per size. A zero
    /// `repeat` is treated as one.
    pub fn new(report: &'r mut Report, repeat: usize) -> Self {
        Self {
            report,
            pool: ValuePool::new(),
            repeat: repeat.max(1),
            unit: TimeUnit::Micros,
            benches: 0,
        }
    }

    /// Starts the graph subsequent benches record into.
    pub fn new_graph(&mut self, element: &str, family: &str, unit: TimeUnit) {
        self.unit = unit;
        self.report.new_graph(element, family, unit);
    }

    /// Runs `setup` then `op` for every size and records one averaged
    /// sample per applicable size under series `label`.
    ///
    /// Returns the number of samples recorded.
    pub fn bench<C, S, O>(&mut self, label: &str, sizes: &[usize], mut setup: S, mut op: O) -> usize
    where
        C: SequenceContainer<Item = T>,
        S: Setup<C>,
        O: Operation<S::Output, T>,
    {
        self.benches += 1;
        let mut recorded = 0;
        for &size in sizes {
            match self.measure::<C, S, O>(size, &mut setup, &mut op) {
                Some(average) => {
                    let value = self.unit.count(average);
                    self.report.new_result(label, &size.to_string(), value);
                    recorded += 1;
                },
                None => {
                    debug!(event = "not_applicable", series = label, size);
                },
            }
        }
        Setup::<C>::clean(&mut setup, &mut self.pool);
        recorded
    }

    fn measure<C, S, O>(&mut self, size: usize, setup: &mut S, op: &mut O) -> Option<Duration>
    where
        C: SequenceContainer<Item = T>,
        S: Setup<C>,
        O: Operation<S::Output, T>,
    {
        let mut total = Duration::ZERO;
        for _ in 0..self.repeat {
            let mut target = Setup::<C>::make(setup, size, &mut self.pool);

            let start = Instant::now();
            let outcome = op.run(&mut target, size, &self.pool);
            let elapsed = start.elapsed();

            drop(target);
            if !outcome.is_applied() {
                return None;
            }
            total += elapsed;
        }
        let trials = u32::try_from(self.repeat).unwrap_or(u32::MAX);
        Some(total / trials)
    }

    /// Number of `bench` calls so far.
    pub fn benches(&self) -> usize {
        self.benches
    }

    pub fn pool(&self) -> &ValuePool<T> {
        &self.pool
    }

    /// Releases every cached value and returns the number of benches run.
    pub fn finish(mut self) -> usize {
        self.pool.clean();
        self.benches
    }
}

#[cfg(test)]
mod tests {
    use std::collections::LinkedList;

    use seqbench::ds::ForwardList;
    use seqbench::element::TrivialSmall;
    use seqbench::policy::operation::{EraseMiddle, FillBack, NoOp, Sort};
    use seqbench::policy::setup::{Empty, EmptyPrepareBackup, FilledRandom};

    use super::*;

    #[test]
    fn records_one_sample_per_size() {
        let mut report = Report::new();
        let mut campaign = Campaign::<TrivialSmall>::new(&mut report, 3);
        campaign.new_graph("TrivialSmall", "sort", TimeUnit::Micros);
        let recorded =
            campaign.bench::<Vec<TrivialSmall>, _, _>("vector", &[10, 20, 30], FilledRandom, Sort);
        assert_eq!(recorded, 3);
        assert_eq!(campaign.finish(), 1);

        let graph = &report.graphs()[0];
        assert_eq!(graph.groups(), vec!["10", "20", "30"]);
        assert_eq!(graph.series(), vec!["vector"]);
    }

    #[test]
    fn not_applicable_records_nothing() {
        let mut report = Report::new();
        let mut campaign = Campaign::<TrivialSmall>::new(&mut report, 2);
        campaign.new_graph("TrivialSmall", "fill_back", TimeUnit::Micros);
        let recorded =
            campaign.bench::<ForwardList<TrivialSmall>, _, _>("forward_list", &[5, 6], Empty, FillBack);
        assert_eq!(recorded, 0);
        let _ = campaign.finish();
        assert_eq!(report.sample_count(), 0);
        assert_eq!(report.graphs().len(), 1);
    }

    #[test]
    fn setup_clean_runs_after_bench() {
        let mut report = Report::new();
        let mut campaign = Campaign::<TrivialSmall>::new(&mut report, 1);
        campaign.new_graph("TrivialSmall", "erase_middle", TimeUnit::Micros);
        let _ = campaign.bench::<LinkedList<TrivialSmall>, _, _>("list", &[50], FilledRandom, EraseMiddle);
        assert_eq!(campaign.pool().shuffled().metrics().capacity, 0);

        let _ = campaign.bench::<Vec<TrivialSmall>, _, _>("vector", &[50], EmptyPrepareBackup, NoOp);
        assert_eq!(campaign.pool().ascending().metrics().capacity, 0);
        assert_eq!(campaign.benches(), 2);
    }

    #[test]
    fn zero_repeat_runs_once() {
        let mut report = Report::new();
        let mut campaign = Campaign::<TrivialSmall>::new(&mut report, 0);
        campaign.new_graph("TrivialSmall", "noop", TimeUnit::Millis);
        assert_eq!(campaign.bench::<Vec<TrivialSmall>, _, _>("vector", &[1], Empty, NoOp), 1);
    }
}
