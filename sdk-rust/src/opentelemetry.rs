use crate::Locale;
use opentelemetry::trace::Status;
use std::time::Instant;
use tracing::{info_span, Span};
use tracing_futures::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// The four gateway operations, used to name spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayOperation {
    AnalyzeImage,
    SuggestMenu,
    GenerateRecipe,
    GenerateImage,
}

impl GatewayOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AnalyzeImage => "analyze_refrigerator_image",
            Self::SuggestMenu => "generate_personalized_menu",
            Self::GenerateRecipe => "generate_recipe",
            Self::GenerateImage => "generate_meal_image",
        }
    }
}

pub struct GatewaySpan {
    span: Span,
    start_time: Instant,
    items: Option<usize>,
    recovered: Option<bool>,
}

impl GatewaySpan {
    pub fn new(
        operation: GatewayOperation,
        provider: &str,
        model_id: &str,
        locale: Option<Locale>,
    ) -> Self {
        let span = match operation {
            GatewayOperation::AnalyzeImage => info_span!("fridge_chef.analyze_refrigerator_image"),
            GatewayOperation::SuggestMenu => info_span!("fridge_chef.generate_personalized_menu"),
            GatewayOperation::GenerateRecipe => info_span!("fridge_chef.generate_recipe"),
            GatewayOperation::GenerateImage => info_span!("fridge_chef.generate_meal_image"),
        };
        let operation_name = match operation {
            GatewayOperation::GenerateImage => "generate_images",
            _ => "generate_content",
        };
        span.set_attribute("gen_ai.operation.name", operation_name);
        span.set_attribute("gen_ai.provider.name", provider.to_string());
        span.set_attribute("gen_ai.request.model", model_id.to_string());
        span.set_attribute("fridge_chef.operation", operation.as_str());
        if let Some(locale) = locale {
            span.set_attribute("fridge_chef.locale", locale.code());
        }

        Self {
            span,
            start_time: Instant::now(),
            items: None,
            recovered: None,
        }
    }

    fn span(&self) -> Span {
        self.span.clone()
    }

    pub async fn instrument_future<F>(&self, future: F) -> F::Output
    where
        F: std::future::Future,
    {
        future.instrument(self.span()).await
    }

    /// Record how many values the reply yielded and whether JSON was found.
    pub fn on_extracted(&mut self, items: usize, recovered: bool) {
        self.items = Some(items);
        self.recovered = Some(recovered);
    }

    pub fn on_error(&mut self, error: &(dyn std::error::Error + 'static)) {
        self.span
            .set_attribute("exception.message", error.to_string());
        self.span.set_status(Status::error(error.to_string()));
    }

    fn on_end(&mut self) {
        if let Some(items) = self.items {
            self.span.set_attribute(
                "fridge_chef.response.items",
                i64::try_from(items).unwrap_or(i64::MAX),
            );
        }
        if let Some(recovered) = self.recovered {
            self.span
                .set_attribute("fridge_chef.response.json_recovered", recovered);
        }
        self.span
            .set_attribute("fridge_chef.duration_seconds", self.elapsed_seconds());
    }

    fn elapsed_seconds(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }
}

impl Drop for GatewaySpan {
    fn drop(&mut self) {
        self.on_end();
    }
}
