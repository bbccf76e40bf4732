use crate::models::Sample;

// A single OHLC candle as printed by the exchange collector
#[derive(Debug, Clone, PartialEq)]
pub struct Candle {
    pub timestamp_ms: i64,
    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub close_price: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(
        timestamp_ms: i64,
        open_price: f64,
        high_price: f64,
        low_price: f64,
        close_price: f64,
        volume: f64,
    ) -> Self {
        Candle {
            timestamp_ms,
            open_price,
            high_price,
            low_price,
            close_price,
            volume,
        }
    }

    /// Reject candles whose prices contradict each other.
    pub fn check_consistency(&self) -> Result<(), String> {
        let prices = [self.open_price, self.high_price, self.low_price, self.close_price];
        if prices.iter().any(|p| !p.is_finite()) || !self.volume.is_finite() {
            return Err("non-finite candle field".to_string());
        }
        if self.volume < 0.0 {
            return Err(format!("negative volume {}", self.volume));
        }
        let inside = |p: f64| self.low_price <= p && p <= self.high_price;
        if !inside(self.open_price) || !inside(self.close_price) {
            return Err(format!(
                "open/close outside low..high ({}..{})",
                self.low_price, self.high_price
            ));
        }
        Ok(())
    }

    // Trends are measured on closes
    pub fn to_sample(&self) -> Sample {
        Sample::new(self.timestamp_ms, self.close_price)
    }
}
