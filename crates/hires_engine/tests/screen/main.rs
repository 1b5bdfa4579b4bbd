mod helpers;

mod flood_fill;
mod pixel_editing;
mod rendering;
