use common::config::{
    CommonConfig, Config, GeneratorConfig, RangeConfig, RankingConfig, RecommendationConfig,
    ReportConfig, ReportFormat, ReportStyle,
};

pub const CLOTHING_CATEGORIES: [&str; 5] = ["T-shirts", "Jeans", "Dresses", "Shoes", "Accessories"];

/// 100 customers ranked into three bins, one placeholder prediction each.
///
/// Frequencies are drawn from a narrow range so duplicates are common.
pub fn sample() -> Config {
    Config {
        common: CommonConfig {
            project_name: "ecom".to_string(),
            log_level: "info".to_string(),
        },
        generator: GeneratorConfig {
            customers: 100,
            seed: 0,
            recency_days: RangeConfig::new(1, 100),
            frequency: RangeConfig::new(1, 10),
            monetary: RangeConfig::new(100, 5000),
        },
        ranking: RankingConfig { bins: 3 },
        recommendation: RecommendationConfig {
            categories: vec!["prediction".to_string()],
            top_n: 0,
        },
        report: ReportConfig {
            style: ReportStyle::Preview,
            format: ReportFormat::Text,
            head_rows: 5,
            preview_recommendations: 5,
        },
    }
}

/// A clothing store with 1000 customers over the last year, five bins per
/// metric and the top three of five product categories per customer.
pub fn clothing_store() -> Config {
    Config {
        common: CommonConfig {
            project_name: "clothing-store".to_string(),
            log_level: "info".to_string(),
        },
        generator: GeneratorConfig {
            customers: 1000,
            seed: 42,
            recency_days: RangeConfig::new(1, 365),
            frequency: RangeConfig::new(1, 20),
            monetary: RangeConfig::new(50, 5000),
        },
        ranking: RankingConfig { bins: 5 },
        recommendation: RecommendationConfig {
            categories: CLOTHING_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            top_n: 3,
        },
        report: ReportConfig {
            style: ReportStyle::Store,
            format: ReportFormat::Text,
            head_rows: 10,
            preview_recommendations: 5,
        },
    }
}
