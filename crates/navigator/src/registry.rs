use crate::error::NavigationError;
use crate::queries::{
    ChurnRiskAnalysis, CustomerLoyalty, CustomerSegmentation, DeviceUsage, KycCompliance,
    NetworkQuality, PaymentBehavior, PlanPerformance, SupportDemand, TopUsersAndRevenue,
};
use crate::report::Report;
use crate::section::Section;
use crate::Query;
use analytics::AnalyticsEngine;
use configuration::ReportSettings;
use core_types::Dataset;
use std::collections::HashMap;

/// Maps each navigation key to the one query that answers it.
///
/// Adding a section means registering another `Query`; dispatch itself never
/// changes.
pub struct QueryRegistry {
    engine: AnalyticsEngine,
    queries: HashMap<Section, Box<dyn Query>>,
}

impl QueryRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            engine: AnalyticsEngine::new(),
            queries: HashMap::new(),
        }
    }

    /// The registry with all ten sections, configured from `settings`.
    pub fn standard(settings: &ReportSettings) -> Self {
        let queries: Vec<Box<dyn Query>> = vec![
            Box::new(CustomerSegmentation),
            Box::new(ChurnRiskAnalysis),
            Box::new(TopUsersAndRevenue {
                top_n: settings.top_n,
            }),
            Box::new(KycCompliance),
            Box::new(PlanPerformance),
            Box::new(NetworkQuality),
            Box::new(PaymentBehavior),
            Box::new(SupportDemand),
            Box::new(CustomerLoyalty),
            Box::new(DeviceUsage),
        ];

        let mut registry = Self::new();
        for query in queries {
            let section = query.section();
            registry.queries.insert(section, query);
        }
        registry
    }

    /// Adds a query. Each section may only be answered by one query.
    pub fn register(&mut self, query: Box<dyn Query>) -> Result<(), NavigationError> {
        let section = query.section();
        if self.queries.contains_key(&section) {
            return Err(NavigationError::DuplicateSection(section));
        }
        self.queries.insert(section, query);
        Ok(())
    }

    /// Registered sections in menu order.
    pub fn sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| self.queries.contains_key(s))
            .collect()
    }

    /// Turns an operator-supplied key into a registered section.
    pub fn resolve(&self, key: &str) -> Result<Section, NavigationError> {
        let section: Section = key.parse()?;
        if !self.queries.contains_key(&section) {
            return Err(NavigationError::NotRegistered(section));
        }
        Ok(section)
    }

    /// Runs the query for `section` against `dataset`.
    pub fn run(&self, section: Section, dataset: &Dataset) -> Result<Report, NavigationError> {
        let query = self
            .queries
            .get(&section)
            .ok_or(NavigationError::NotRegistered(section))?;

        tracing::info!(section = %section, rows = dataset.len(), "Running section");
        let tables = query.run(&self.engine, dataset);
        tracing::debug!(
            section = %section,
            tables = tables.len(),
            result_rows = tables.iter().map(|t| t.len()).sum::<usize>(),
            "Section finished"
        );

        Ok(Report {
            section,
            title: section.title(),
            tables,
        })
    }

    /// `resolve` followed by `run`.
    pub fn run_key(&self, key: &str, dataset: &Dataset) -> Result<Report, NavigationError> {
        let section = self.resolve(key)?;
        self.run(section, dataset)
    }
}

impl Default for QueryRegistry {
    fn default() -> Self {
        Self::standard(&ReportSettings::default())
    }
}
