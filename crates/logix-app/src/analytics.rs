//! Sample performance metrics for the analytics screen
//!
//! Static demo numbers for the fictitious routing engine; there is no real
//! measurement behind them.

/// Headline routing-engine KPI
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutingKpi {
    /// Mean route calculation time, seconds
    pub avg_seconds: f64,
    pub best_seconds: f64,
    pub worst_seconds: f64,
    pub deviation_seconds: f64,
    /// Non-functional requirement: calculations must finish under this
    pub target_seconds: f64,
}

impl RoutingKpi {
    /// Whether the engine meets its response-time requirement
    pub fn compliant(&self) -> bool {
        self.avg_seconds < self.target_seconds
    }

    /// Gauge fill fraction (avg against target), clamped to 0..1
    pub fn gauge_fraction(&self) -> f64 {
        (self.avg_seconds / self.target_seconds).clamp(0.0, 1.0)
    }
}

/// Everything the analytics screen displays
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsReport {
    pub kpi: RoutingKpi,
    /// Claimed distance saving of the optimizer, percent
    pub distance_saving_percent: f64,
    /// Calculation time per weekday, seconds
    pub weekly_seconds: Vec<(&'static str, f64)>,
    /// Orders processed per two-hour bucket
    pub orders_per_hour: Vec<(&'static str, u32)>,
    pub orders_today: u32,
    pub success_rate_percent: f64,
    pub routes_calculated_24h: u32,
    pub uptime_percent: f64,
    pub cpu_load_percent: f64,
}

impl AnalyticsReport {
    pub fn weekly_average_seconds(&self) -> f64 {
        if self.weekly_seconds.is_empty() {
            return 0.0;
        }
        self.weekly_seconds.iter().map(|(_, s)| s).sum::<f64>() / self.weekly_seconds.len() as f64
    }
}

pub fn sample_report() -> AnalyticsReport {
    AnalyticsReport {
        kpi: RoutingKpi {
            avg_seconds: 27.0,
            best_seconds: 22.0,
            worst_seconds: 28.0,
            deviation_seconds: 2.1,
            target_seconds: 30.0,
        },
        distance_saving_percent: 15.0,
        weekly_seconds: vec![
            ("Lun", 24.0),
            ("Mar", 26.0),
            ("Mié", 23.0),
            ("Jue", 27.0),
            ("Vie", 25.0),
            ("Sáb", 28.0),
            ("Dom", 22.0),
        ],
        orders_per_hour: vec![
            ("08:00", 12),
            ("10:00", 18),
            ("12:00", 24),
            ("14:00", 20),
            ("16:00", 16),
            ("18:00", 8),
        ],
        orders_today: 98,
        success_rate_percent: 99.7,
        routes_calculated_24h: 1247,
        uptime_percent: 99.9,
        cpu_load_percent: 34.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_compliant() {
        let report = sample_report();
        assert!(report.kpi.compliant());
        assert!((report.kpi.gauge_fraction() - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_weekly_average() {
        let report = sample_report();
        assert!((report.weekly_average_seconds() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_compliant_kpi() {
        let kpi = RoutingKpi {
            avg_seconds: 31.0,
            best_seconds: 29.0,
            worst_seconds: 40.0,
            deviation_seconds: 3.0,
            target_seconds: 30.0,
        };
        assert!(!kpi.compliant());
        assert_eq!(kpi.gauge_fraction(), 1.0);
    }
}
