use crate::{
    abstract_trait::card::service::generator::CardGeneratorServiceTrait,
    domain::{
        requests::GenerateCardsRequest,
        responses::{ApiResponse, BatchStatus, CardBatch},
    },
    errors::{ServiceError, format_validation_errors},
    service::card::batch::generate_cards,
    utils::{DynClock, Metrics, mask_card_number},
};
use anyhow::Result;
use tracing::{error, info, warn};
use validator::Validate;

pub struct CardGeneratorService {
    clock: DynClock,
    metrics: Metrics,
}

impl CardGeneratorService {
    pub fn new(clock: DynClock, metrics: Metrics) -> Self {
        Self { clock, metrics }
    }
}

impl CardGeneratorServiceTrait for CardGeneratorService {
    fn generate(
        &self,
        req: &GenerateCardsRequest,
    ) -> Result<ApiResponse<CardBatch>, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let errors = format_validation_errors(&validation_errors);
            error!("Validation failed: {errors:?}");
            return Err(ServiceError::Validation(errors));
        }

        info!(
            "🎲 Generating {} cards for BIN {} (expiry pinned: {}, cvv pinned: {})",
            req.count,
            req.prefix,
            req.fixed_expiry.is_some(),
            req.fixed_cvv.is_some()
        );

        let mut rng = rand::rng();
        let batch = generate_cards(
            &mut rng,
            self.clock.as_ref(),
            &req.prefix,
            req.count,
            req.fixed_expiry.as_deref(),
            req.fixed_cvv.as_deref(),
        )
        .map_err(|e| {
            error!("💥 Failed to generate cards for BIN {}: {e}", req.prefix);
            ServiceError::from(e)
        })?;

        self.metrics.add_generated(batch.len());

        let message = match batch.status() {
            BatchStatus::Complete => {
                info!(
                    "✅ Generated {} cards for BIN {}, first {}",
                    batch.len(),
                    req.prefix,
                    batch
                        .records
                        .first()
                        .map(|c| mask_card_number(&c.number))
                        .unwrap_or_default()
                );
                "✅ Cards generated successfully!"
            }
            BatchStatus::Partial => {
                warn!(
                    "⚠️ Only {} of {} cards generated for BIN {} after {} attempts",
                    batch.len(),
                    batch.requested,
                    req.prefix,
                    batch.attempts
                );
                "⚠️ Fewer cards generated than requested"
            }
            BatchStatus::Exhausted => {
                warn!(
                    "❌ No cards generated for BIN {} after {} attempts",
                    req.prefix, batch.attempts
                );
                "❌ No cards could be generated"
            }
        };

        Ok(ApiResponse::success(message, batch))
    }
}
