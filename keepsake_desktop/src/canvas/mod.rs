mod bouquet;
mod envelope;

pub use bouquet::BouquetCanvas;
pub use envelope::EnvelopeCanvas;
