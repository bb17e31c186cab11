use crate::{consts::CELLS, square::Square};

/// Turns a raw converter reading into the square the sensor points at.
pub trait AnalogDecoder {
    fn decode(&self, raw: u16) -> Option<Square>;
}

/// Full-scale reading of the 12-bit converter the band table was measured on.
const TABLE_MAX: u16 = 4095;

/// Inclusive reading ranges for squares 0 through 8, with dead gaps between.
const BANDS: [(u16, u16); CELLS] = [
    (0, 350),
    (450, 800),
    (900, 1250),
    (1350, 1700),
    (1800, 2150),
    (2250, 2600),
    (2700, 3050),
    (3150, 3500),
    (3600, 4095),
];

/// Fixed-threshold decoder for a potentiometer swept across the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BandDecoder {
    bands: [(u16, u16); CELLS],
}

impl BandDecoder {
    pub const fn new() -> Self {
        Self { bands: BANDS }
    }

    /// The same bands rescaled for a converter whose full scale is `max`.
    pub fn scaled(max: u16) -> Self {
        let scale = |value: u16| (u32::from(value) * u32::from(max) / u32::from(TABLE_MAX)) as u16;
        Self {
            bands: BANDS.map(|(low, high)| (scale(low), scale(high))),
        }
    }
}

impl Default for BandDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalogDecoder for BandDecoder {
    fn decode(&self, raw: u16) -> Option<Square> {
        self.bands
            .iter()
            .position(|&(low, high)| (low..=high).contains(&raw))
            .and_then(Square::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::sq;

    #[test]
    fn band_edges_are_inclusive() {
        let decoder = BandDecoder::new();
        assert_eq!(decoder.decode(0), Some(sq(0)));
        assert_eq!(decoder.decode(350), Some(sq(0)));
        assert_eq!(decoder.decode(450), Some(sq(1)));
        assert_eq!(decoder.decode(2000), Some(sq(4)));
        assert_eq!(decoder.decode(4095), Some(sq(8)));
    }

    #[test]
    fn gaps_and_overrange_decode_to_nothing() {
        let decoder = BandDecoder::new();
        assert_eq!(decoder.decode(351), None);
        assert_eq!(decoder.decode(1300), None);
        assert_eq!(decoder.decode(3550), None);
        assert_eq!(decoder.decode(5000), None);
    }

    #[test]
    fn bands_are_disjoint_and_ascending() {
        for pair in BANDS.windows(2) {
            assert!(pair[0].0 <= pair[0].1);
            assert!(pair[0].1 < pair[1].0);
        }
    }

    #[test]
    fn ten_bit_scaling_keeps_every_square_reachable() {
        let decoder = BandDecoder::scaled(1023);
        assert_eq!(decoder.decode(0), Some(sq(0)));
        assert_eq!(decoder.decode(1023), Some(sq(8)));
        assert_eq!(decoder.decode(512), Some(sq(4)));
        let hit = (0..=1023).filter_map(|raw| decoder.decode(raw)).collect::<Vec<_>>();
        assert!(Square::all().all(|square| hit.contains(&square)));
    }
}
