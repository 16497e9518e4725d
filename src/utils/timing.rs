use std::time::{Duration, Instant};

/// A completed stage with timing information
#[derive(Debug, Clone)]
pub struct StageTiming {
    pub name: String,
    pub duration: Duration,
    pub succeeded: bool,
}

/// Records how long each stage of one report generation took.
///
/// Not shared between requests; one timer lives for one pipeline run.
#[derive(Debug)]
pub struct StageTimer {
    started: Instant,
    stages: Vec<StageTiming>,
}

impl Default for StageTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl StageTimer {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            stages: Vec::new(),
        }
    }

    /// Runs `stage` and records its duration under `name`
    pub fn time<T, E>(
        &mut self,
        name: impl Into<String>,
        stage: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E> {
        let start = Instant::now();
        let result = stage();
        self.stages.push(StageTiming {
            name: name.into(),
            duration: start.elapsed(),
            succeeded: result.is_ok(),
        });
        result
    }

    pub fn stages(&self) -> &[StageTiming] {
        &self.stages
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// One line per stage, in execution order
    pub fn summary(&self) -> String {
        let mut report = String::new();
        for (idx, stage) in self.stages.iter().enumerate() {
            report.push_str(&format!(
                "{}. {} - {} us{}\n",
                idx + 1,
                stage.name,
                stage.duration.as_micros(),
                if stage.succeeded { "" } else { " (failed)" }
            ));
        }
        report.push_str(&format!("Total: {} us", self.elapsed().as_micros()));
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_stages_in_order() {
        let mut timer = StageTimer::new();
        let first: Result<u32, ()> = timer.time("first", || Ok(1));
        let second: Result<u32, &str> = timer.time("second", || Err("boom"));

        assert_eq!(first, Ok(1));
        assert_eq!(second, Err("boom"));

        let names: Vec<_> = timer.stages().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert!(timer.stages()[0].succeeded);
        assert!(!timer.stages()[1].succeeded);
    }

    #[test]
    fn test_summary_marks_failures() {
        let mut timer = StageTimer::new();
        let _: Result<(), ()> = timer.time("title", || Err(()));
        let summary = timer.summary();
        assert!(summary.starts_with("1. title - "));
        assert!(summary.contains("(failed)"));
        assert!(summary.contains("Total:"));
    }
}
