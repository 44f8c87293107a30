use crate::core::IdSequence;
use crate::modules::payments::models::{CreatePaymentRequest, PaymentResponse, PaymentStatus};

/// Service for recording payments
#[derive(Debug, Default)]
pub struct PaymentService {
    sequence: IdSequence,
}

impl PaymentService {
    pub fn new() -> Self {
        Self {
            sequence: IdSequence::new(),
        }
    }

    /// Mint a payment id and mark the payment processed.
    /// Nothing is stored and the invoice reference is taken on trust.
    pub fn create(&self, request: CreatePaymentRequest) -> PaymentResponse {
        let id = self.sequence.next();

        tracing::info!(
            payment_id = id,
            invoice_id = request.invoice_id,
            method = %request.method,
            amount = request.amount,
            "Payment processed"
        );

        PaymentResponse {
            id,
            invoice_id: request.invoice_id,
            amount: request.amount,
            payment_date: request.payment_date,
            method: request.method,
            status: PaymentStatus::Processed,
        }
    }

    /// Last payment id handed out
    pub fn last_id(&self) -> u64 {
        self.sequence.current()
    }
}
