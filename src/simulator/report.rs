//! Simulation report generation.

use super::runner::RunStats;
use serde::Serialize;
use std::collections::BTreeMap;

/// Landing record for one species (or "Nothing" for empty hooks).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpeciesStats {
    pub attempts: u32,
    pub successes: u32,
    pub avg_weight_g: f64,
}

impl SpeciesStats {
    pub fn success_rate(&self) -> f64 {
        if self.attempts == 0 {
            return 0.0;
        }
        self.successes as f64 / self.attempts as f64 * 100.0
    }
}

/// Aggregated results from multiple simulated reels.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub successes: u32,
    pub failures: u32,
    pub timeouts: u32,

    /// Percentage of runs landed.
    pub success_rate: f64,
    pub avg_duration_secs: f64,
    pub avg_pushes: f64,
    pub avg_success_duration_secs: f64,

    pub per_species: BTreeMap<String, SpeciesStats>,

    // Individual runs for detailed analysis
    #[serde(skip)]
    pub runs: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let successes = runs.iter().filter(|r| r.succeeded()).count() as u32;
        let timeouts = runs.iter().filter(|r| r.timed_out()).count() as u32;
        let failures = num_runs - successes - timeouts;
        let divisor = num_runs.max(1) as f64;

        let success_rate = successes as f64 / divisor * 100.0;
        let avg_duration_secs = runs.iter().map(|r| r.duration_secs).sum::<f64>() / divisor;
        let avg_pushes = runs.iter().map(|r| r.pushes as f64).sum::<f64>() / divisor;
        let avg_success_duration_secs = runs
            .iter()
            .filter(|r| r.succeeded())
            .map(|r| r.duration_secs)
            .sum::<f64>()
            / successes.max(1) as f64;

        let mut per_species: BTreeMap<String, SpeciesStats> = BTreeMap::new();
        for run in &runs {
            let name = run.species.as_deref().unwrap_or("Nothing").to_string();
            let stats = per_species.entry(name).or_default();
            stats.attempts += 1;
            if run.succeeded() {
                stats.successes += 1;
            }
            // Summed here, averaged below
            stats.avg_weight_g += run.weight_g;
        }
        for stats in per_species.values_mut() {
            stats.avg_weight_g /= stats.attempts.max(1) as f64;
        }

        Self {
            num_runs,
            successes,
            failures,
            timeouts,
            success_rate,
            avg_duration_secs,
            avg_pushes,
            avg_success_duration_secs,
            per_species,
            runs,
        }
    }

    /// Human-readable report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                      REEL BALANCE REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} landed, {} escaped, {} timed out\n\n",
            self.num_runs, self.successes, self.failures, self.timeouts
        ));

        report.push_str("── OVERALL ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Success Rate:        {:.1}%\n",
            self.success_rate
        ));
        report.push_str(&format!(
            "  Avg Duration:        {:.2}s\n",
            self.avg_duration_secs
        ));
        report.push_str(&format!(
            "  Avg Time to Land:    {:.2}s\n",
            self.avg_success_duration_secs
        ));
        report.push_str(&format!("  Avg Pushes:          {:.1}\n\n", self.avg_pushes));

        report.push_str("── BY SPECIES ──────────────────────────────────────────────────\n");
        report.push_str("  Species       Attempts   Landed    Rate   Avg Weight\n");
        for (name, stats) in &self.per_species {
            report.push_str(&format!(
                "  {:<12}  {:>8}  {:>7}  {:>5.1}%  {:>9.0}g\n",
                name,
                stats.attempts,
                stats.successes,
                stats.success_rate(),
                stats.avg_weight_g
            ));
        }

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
