//! The per-variant resolution pipeline.
//!
//! For every variant the [`Resolver`] asks for exome data first and falls back to the
//! genome dataset when gnomAD has no exome section, then reads the configured
//! population's counts from whichever section it got. Every input variant produces
//! exactly one [`ResolutionResult`], failures included.
use std::fmt::{self, Display};
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::errors::{DriverError, DriverResult, FetchFailure};
use crate::frequency::{PopulationLookup, get_allele_counts, get_variant_freq};
use crate::models::{
    DataCategory, PopulationRecord, ReferenceBuild, Resolution, ResolutionResult, VariantResponse,
};
use crate::pacing::{PacingPolicy, RequestPacer};
use crate::query::{QueryPayload, build_query};

/// Anything that can answer a variant query, normally the gnomAD HTTP client.
pub trait VariantSource {
    fn fetch(&self, payload: &QueryPayload) -> Result<VariantResponse, FetchFailure>;
}

impl<T: VariantSource + ?Sized> VariantSource for &T {
    fn fetch(&self, payload: &QueryPayload) -> Result<VariantResponse, FetchFailure> {
        (**self).fetch(payload)
    }
}

/// Destination for finished results, normally the report file.
pub trait ResultSink {
    fn record(&mut self, result: &ResolutionResult) -> std::io::Result<()>;
}

impl ResultSink for Vec<ResolutionResult> {
    fn record(&mut self, result: &ResolutionResult) -> std::io::Result<()> {
        self.push(result.clone());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub build: ReferenceBuild,
    pub population: String,
    pub pacing: PacingPolicy,
    /// Report a zero allele count as frequency 0 instead of N/A.
    pub report_zero_frequency: bool,
}

impl ResolverConfig {
    pub fn new(build: ReferenceBuild, population: &str) -> Self {
        ResolverConfig {
            build,
            population: population.to_string(),
            pacing: PacingPolicy::default(),
            report_zero_frequency: false,
        }
    }

    pub fn with_pacing(mut self, pacing: PacingPolicy) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn with_report_zero_frequency(mut self, report_zero_frequency: bool) -> Self {
        self.report_zero_frequency = report_zero_frequency;
        self
    }
}

/// Tally of outcomes over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub resolved: usize,
    pub population_unavailable: usize,
    pub no_data: usize,
    pub fetch_failures: usize,
}

impl RunSummary {
    fn tally(&mut self, resolution: &Resolution) {
        self.total += 1;
        match resolution {
            Resolution::Resolved { .. } => self.resolved += 1,
            Resolution::PopulationUnavailable { .. } => self.population_unavailable += 1,
            Resolution::NoData => self.no_data += 1,
            Resolution::FetchFailed(_) => self.fetch_failures += 1,
        }
    }
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processed {} variants: {} resolved, {} without population counts, {} without exome or genome data, {} failed lookups",
            self.total, self.resolved, self.population_unavailable, self.no_data, self.fetch_failures
        )
    }
}

pub struct Resolver<S> {
    source: S,
    config: ResolverConfig,
    pacer: RequestPacer,
}

impl<S: VariantSource> Resolver<S> {
    pub fn new(source: S, config: ResolverConfig) -> Self {
        let pacer = RequestPacer::new(config.pacing);
        Resolver {
            source,
            config,
            pacer,
        }
    }

    /// Replace the sleep used for pacing pauses.
    pub fn with_sleep(mut self, sleep: fn(Duration)) -> Self {
        self.pacer = self.pacer.with_sleep(sleep);
        self
    }

    pub fn pacer(&self) -> &RequestPacer {
        &self.pacer
    }

    ///
    /// Resolve the configured population's frequency for one variant.
    ///
    /// Never fails: every failure is folded into the returned [`Resolution`].
    ///
    pub fn resolve_variant(&self, variant_id: &str) -> ResolutionResult {
        let exome = match self.fetch(variant_id, DataCategory::Exome) {
            Ok(response) => response,
            Err(failure) => {
                warn!(variant = variant_id, error = %failure, "Variant not found");
                return ResolutionResult::new(variant_id, Resolution::FetchFailed(failure));
            }
        };

        let genome;
        let (category, section) = match exome.section(DataCategory::Exome) {
            Some(section) => (DataCategory::Exome, section),
            None => {
                debug!(variant = variant_id, "no exome data, trying the genome dataset");
                genome = match self.fetch(variant_id, DataCategory::Genome) {
                    Ok(response) => response,
                    Err(failure) => {
                        warn!(variant = variant_id, error = %failure, "Variant not found in the genome dataset");
                        return ResolutionResult::new(variant_id, Resolution::FetchFailed(failure));
                    }
                };
                match genome.section(DataCategory::Genome) {
                    Some(section) => (DataCategory::Genome, section),
                    None => {
                        error!(
                            variant = variant_id,
                            "no api response for either the exome or the genome data"
                        );
                        return ResolutionResult::new(variant_id, Resolution::NoData);
                    }
                }
            }
        };

        let resolution = self.resolve_population(variant_id, category, section.populations());
        ResolutionResult::new(variant_id, resolution)
    }

    ///
    /// Resolve every variant in order, handing each result to `sink` and pacing
    /// requests between variants.
    ///
    /// Only a failing sink aborts the run; per-variant failures end up as rows.
    ///
    pub fn run<I, T, K>(&mut self, variants: I, sink: &mut K) -> DriverResult<RunSummary>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
        K: ResultSink + ?Sized,
    {
        info!(
            population = %self.config.population,
            dataset = %self.config.build,
            "Searching for frequencies"
        );

        let mut summary = RunSummary::default();
        let mut variants = variants.into_iter().peekable();
        while let Some(variant) = variants.next() {
            let variant = variant.as_ref();
            let result = self.resolve_variant(variant);
            summary.tally(&result.resolution);

            sink.record(&result).map_err(|source| DriverError::Sink {
                variant: variant.to_string(),
                source,
            })?;

            let more_pending = variants.peek().is_some();
            self.pacer.complete_and_wait(more_pending);
        }

        info!("{}", summary);
        Ok(summary)
    }

    fn fetch(&self, variant_id: &str, category: DataCategory) -> Result<VariantResponse, FetchFailure> {
        let payload = build_query(variant_id, category, self.config.build);
        self.source.fetch(&payload)
    }

    fn resolve_population(
        &self,
        variant_id: &str,
        category: DataCategory,
        records: &[PopulationRecord],
    ) -> Resolution {
        let population = self.config.population.as_str();
        let unavailable = Resolution::PopulationUnavailable { category };

        let counts = match get_allele_counts(records, population) {
            PopulationLookup::Found(counts) => counts,
            PopulationLookup::NotFound => {
                warn!(
                    variant = variant_id,
                    dataset = %category,
                    "no allele counts found for the {} population",
                    population
                );
                return unavailable;
            }
            PopulationLookup::MissingCounts => {
                warn!(
                    variant = variant_id,
                    dataset = %category,
                    "allele counts for the {} population are null",
                    population
                );
                return unavailable;
            }
        };

        if counts.total == 0 {
            warn!(variant = variant_id, dataset = %category, "total allele count is zero for the {} population", population);
            return unavailable;
        }
        if counts.count > counts.total {
            warn!(
                variant = variant_id,
                dataset = %category,
                count = counts.count,
                total = counts.total,
                "allele count exceeds the total allele count"
            );
            return unavailable;
        }
        if counts.count == 0 && !self.config.report_zero_frequency {
            warn!(
                variant = variant_id,
                dataset = %category,
                total = counts.total,
                "variant allele not observed in the {} population",
                population
            );
            return unavailable;
        }

        match get_variant_freq(counts.count, counts.total) {
            Ok(frequency) => Resolution::Resolved {
                category,
                population: population.to_string(),
                counts,
                frequency,
            },
            Err(err) => {
                warn!(variant = variant_id, error = %err, "can't derive a frequency");
                unavailable
            }
        }
    }
}
