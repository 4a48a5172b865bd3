//! Cluster renderer: turns a [`ClusterSet`] into idea-card markup

pub mod markup;

use crate::core::data::{ClusterSet, Idea, MarketAnalysis, Metric, Validation};
use crate::utils::format::capitalize_first;
pub use markup::Escaping;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    escaping: Escaping,
}

impl Renderer {
    pub fn new(escaping: Escaping) -> Self {
        Self { escaping }
    }

    /// Render every cluster in order; an empty set renders an empty string
    pub fn render(&self, clusters: &ClusterSet) -> String {
        let mut html = String::new();
        for (name, ideas) in clusters.iter() {
            self.push_header(&mut html, name);
            // index restarts for each cluster
            for (index, idea) in ideas.iter().enumerate() {
                self.push_card(&mut html, index + 1, idea);
            }
        }
        html
    }

    /// The single error block shown instead of cards
    pub fn render_error(&self, message: &str) -> String {
        format!(
            r#"<div class="error">Error: {}</div>"#,
            self.escaping.apply(message)
        )
    }

    fn push_header(&self, html: &mut String, name: &str) {
        let _ = write!(
            html,
            r#"<div class="ideas-header"><h2>🎯 {}</h2></div>"#,
            self.escaping.apply(&capitalize_first(name))
        );
    }

    fn push_card(&self, html: &mut String, index: usize, idea: &Idea) {
        let esc = self.escaping;
        let _ = write!(
            html,
            r#"
                <div class="idea-card">
                    <h3 style="color: #2d3748; margin-bottom: 1rem;">💡 Idea {index}</h3>
                    <p style="font-size: 1.1rem; line-height: 1.6; margin-bottom: 1.5rem;">{text}</p>

                    <div class="metric-grid">{metrics}
                    </div>

                    {differentiator}

                    {validation}

                    {market}

                    {justification}
                </div>
                "#,
            text = esc.apply(&idea.text()),
            metrics = self.metrics(idea),
            differentiator = idea
                .differentiator()
                .map(|d| format!(
                    "<p><strong>🎯 Key Differentiator:</strong> {}</p>",
                    esc.apply(&d)
                ))
                .unwrap_or_default(),
            validation = idea
                .validation()
                .map(|v| self.validation_block(&v))
                .unwrap_or_default(),
            market = idea
                .market_analysis()
                .map(|m| self.market_block(&m))
                .unwrap_or_default(),
            justification = idea
                .justification()
                .map(|j| format!("<p><strong>💭 Analysis:</strong> {}</p>", esc.apply(&j)))
                .unwrap_or_default(),
        );
    }

    fn metrics(&self, idea: &Idea) -> String {
        let mut out = String::new();
        for metric in Metric::ALL {
            let (icon, color) = metric_style(metric);
            let _ = write!(
                out,
                r#"
                        <div class="metric-card">
                            <h4 style="color: {color}; margin: 0;">{icon} {score}/10</h4>
                            <p style="margin: 0.5rem 0 0 0; font-size: 0.9rem; color: #718096;">{label}</p>
                        </div>"#,
                score = self.escaping.apply(&idea.score(metric)),
                label = metric.label(),
            );
        }
        out
    }

    fn validation_block(&self, v: &Validation) -> String {
        let esc = self.escaping;
        format!(
            r#"
                    <div class="validation-section">
                        <h4 style="color: #c2410c; margin-bottom: 0.5rem;">✅ Validation Framework</h4>
                        <p><strong>Target Users:</strong> {}</p>
                        <p><strong>Entry Barrier:</strong> {}</p>
                        <p><strong>Monetization:</strong> {}</p>
                        <p><strong>Key Risks:</strong> {}</p>
                    </div>
                    "#,
            esc.apply(&v.target_users),
            esc.apply(&v.entry_barrier),
            esc.apply(&v.monetization),
            esc.apply(&v.risks),
        )
    }

    fn market_block(&self, m: &MarketAnalysis) -> String {
        let esc = self.escaping;
        format!(
            r#"
                    <div class="market-section">
                        <h4 style="color: #1e40af; margin-bottom: 0.5rem;">📊 Market Intelligence</h4>
                        <p><strong>Total Addressable Market:</strong> {}</p>
                        <p><strong>Growth Rate:</strong> {}</p>
                        <p style="font-size: 0.9rem; color: #64748b;"><em>Source: {}</em></p>
                    </div>
                    "#,
            esc.apply(&m.tam),
            esc.apply(&m.cagr),
            esc.apply(&m.source),
        )
    }
}

fn metric_style(metric: Metric) -> (&'static str, &'static str) {
    match metric {
        Metric::Novelty => ("⭐", "#667eea"),
        Metric::Uniqueness => ("🎯", "#38a169"),
        Metric::BusinessValue => ("💰", "#f56565"),
    }
}
