/// One error diffusion target, relative to the current pixel.
///
/// `dy` is never negative and `dx` is positive when `dy == 0`, so every
/// target is a pixel the raster scan has not visited yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffusionWeight {
    pub dx: isize,
    pub dy: usize,
    pub weight: f32,
}

const fn w(dx: isize, dy: usize, sixteenths: u8) -> DiffusionWeight {
    DiffusionWeight {
        dx,
        dy,
        weight: sixteenths as f32 / 16.0,
    }
}

//        X   7
//    3   5   1
pub const FLOYD_STEINBERG: [DiffusionWeight; 4] = [w(1, 0, 7), w(-1, 1, 3), w(0, 1, 5), w(1, 1, 1)];
