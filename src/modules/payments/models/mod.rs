mod payment;

pub use payment::{CreatePaymentRequest, PaymentMethod, PaymentResponse, PaymentStatus};
