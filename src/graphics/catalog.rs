//! Built-in palette catalog.
//!
//! Super Game Boy values follow the published SGB palette tables; the rest are
//! Game Boy Color boot palettes and community favourites.

use super::palette::{Palette, Rgb};

macro_rules! palette {
    ($key:literal, $name:literal, [$(($r:literal, $g:literal, $b:literal)),* $(,)?]) => {
        Palette {
            key: $key,
            name: $name,
            colors: [$(Rgb::new($r, $g, $b)),*],
        }
    };
}

pub const DEFAULT_PALETTE: &str = "gb";

pub const PALETTES: &[Palette] = &[
    palette!("sgb1a", "Super Game Boy 1A", [(255, 232, 207), (223, 144, 79), (175, 40, 32), (48, 24, 80)]),
    palette!("sgb1b", "Super Game Boy 1B", [(223, 216, 192), (207, 176, 112), (176, 80, 16), (0, 0, 0)]),
    palette!("sgb1c", "Super Game Boy 1C", [(255, 192, 255), (239, 152, 80), (159, 56, 96), (63, 56, 159)]),
    palette!("sgb1d", "Super Game Boy 1D", [(255, 248, 175), (192, 128, 79), (255, 0, 0), (80, 24, 0)]),
    palette!("sgb1e", "Super Game Boy 1E", [(255, 248, 175), (127, 192, 127), (111, 136, 64), (95, 56, 32)]),
    palette!("sgb1f", "Super Game Boy 1F", [(223, 232, 255), (224, 136, 80), (175, 0, 0), (0, 64, 16)]),
    palette!("sgb1g", "Super Game Boy 1G", [(0, 0, 80), (0, 160, 239), (127, 120, 0), (255, 248, 95)]),
    palette!("sgb1h", "Super Game Boy 1H", [(255, 232, 224), (255, 184, 143), (128, 64, 0), (48, 24, 0)]),
    palette!("sgb2a", "Super Game Boy 2A", [(240, 200, 160), (192, 136, 79), (47, 120, 0), (0, 0, 0)]),
    palette!("sgb2b", "Super Game Boy 2B", [(255, 248, 255), (255, 232, 80), (255, 48, 0), (80, 0, 95)]),
    palette!("sgb2c", "Super Game Boy 2C", [(255, 192, 255), (239, 136, 143), (127, 48, 239), (47, 40, 159)]),
    palette!("sgb2d", "Super Game Boy 2D", [(255, 248, 160), (0, 248, 0), (255, 48, 0), (0, 0, 80)]),
    palette!("sgb2e", "Super Game Boy 2E", [(255, 248, 128), (144, 176, 224), (47, 16, 96), (16, 8, 16)]),
    palette!("sgb2f", "Super Game Boy 2F", [(208, 248, 255), (255, 144, 80), (160, 0, 0), (31, 0, 0)]),
    palette!("sgb2g", "Super Game Boy 2G", [(111, 184, 63), (224, 80, 64), (224, 184, 128), (0, 24, 0)]),
    palette!("sgb2h", "Super Game Boy 2H", [(255, 248, 255), (191, 184, 191), (112, 112, 112), (0, 0, 0)]),
    palette!("sgb3a", "Super Game Boy 3A", [(255, 208, 159), (112, 192, 192), (255, 96, 47), (48, 72, 96)]),
    palette!("sgb3b", "Super Game Boy 3B", [(223, 216, 192), (224, 128, 32), (0, 80, 0), (0, 16, 16)]),
    palette!("sgb3c", "Super Game Boy 3C", [(224, 168, 207), (255, 248, 127), (0, 184, 255), (32, 32, 95)]),
    palette!("sgb3d", "Super Game Boy 3D", [(240, 248, 191), (224, 168, 127), (15, 200, 0), (0, 0, 0)]),
    palette!("sgb3e", "Super Game Boy 3E", [(255, 248, 191), (224, 176, 111), (176, 120, 32), (80, 72, 112)]),
    palette!("sgb3f", "Super Game Boy 3F", [(127, 120, 207), (255, 104, 255), (255, 208, 0), (64, 64, 64)]),
    palette!("sgb3g", "Super Game Boy 3G", [(96, 216, 80), (255, 248, 255), (207, 48, 63), (63, 0, 0)]),
    palette!("sgb3h", "Super Game Boy 3H", [(224, 248, 160), (127, 200, 63), (79, 136, 31), (15, 24, 0)]),
    palette!("sgb4a", "Super Game Boy 4A", [(240, 168, 111), (127, 168, 255), (208, 0, 208), (0, 0, 127)]),
    palette!("sgb4b", "Super Game Boy 4B", [(240, 232, 240), (239, 160, 96), (64, 120, 63), (31, 8, 15)]),
    palette!("sgb4c", "Super Game Boy 4C", [(255, 224, 224), (223, 160, 208), (159, 160, 224), (15, 0, 0)]),
    palette!("sgb4d", "Super Game Boy 4D", [(255, 248, 191), (144, 200, 207), (79, 104, 127), (15, 32, 79)]),
    palette!("sgb4e", "Super Game Boy 4E", [(255, 224, 176), (232, 176, 120), (120, 66, 144), (0, 10, 21)]),
    palette!("sgb4f", "Super Game Boy 4F", [(191, 208, 208), (223, 128, 223), (128, 0, 160), (63, 0, 0)]),
    palette!("sgb4g", "Super Game Boy 4G", [(176, 224, 31), (191, 32, 95), (47, 16, 0), (0, 128, 96)]),
    palette!("sgb4h", "Super Game Boy 4H", [(255, 248, 207), (191, 192, 95), (128, 136, 64), (64, 80, 47)]),
    palette!("gbc1", "Game Boy Color 1", [(255, 255, 255), (255, 173, 99), (132, 49, 0), (0, 0, 0)]),
    palette!("gbc2", "Game Boy Color 2", [(255, 255, 255), (255, 132, 132), (148, 58, 58), (0, 0, 0)]),
    palette!("gbc3", "Game Boy Color 3", [(255, 255, 255), (123, 255, 49), (0, 132, 0), (0, 0, 0)]),
    palette!("gbc4", "Game Boy Color 4", [(255, 255, 255), (99, 165, 255), (0, 0, 255), (0, 0, 0)]),
    palette!("gbc5", "Game Boy Color 5", [(255, 230, 197), (206, 156, 132), (132, 107, 41), (90, 49, 8)]),
    palette!("gbc6", "Game Boy Color 6", [(255, 255, 255), (140, 140, 222), (82, 82, 140), (0, 0, 0)]),
    palette!("gbc7", "Game Boy Color 7", [(255, 255, 255), (165, 165, 165), (82, 82, 82), (0, 0, 0)]),
    palette!("gbc8", "Game Boy Color 8", [(255, 255, 165), (255, 148, 148), (148, 148, 255), (0, 0, 0)]),
    palette!("gbc9", "Game Boy Color 9", [(255, 255, 255), (255, 255, 0), (255, 0, 0), (0, 0, 0)]),
    palette!("gbc10", "Game Boy Color 10", [(255, 255, 255), (255, 255, 0), (123, 74, 0), (0, 0, 0)]),
    palette!("gbc11", "Game Boy Color 11", [(255, 255, 255), (82, 255, 0), (255, 66, 0), (0, 0, 0)]),
    palette!("gbc12", "Game Boy Color 12", [(255, 255, 255), (123, 255, 49), (0, 99, 197), (0, 0, 0)]),
    palette!("gbc13", "Game Boy Color 13", [(0, 0, 0), (0, 132, 132), (255, 222, 0), (255, 255, 255)]),
    palette!("gb", "Game Boy DMG", [(165, 198, 48), (139, 172, 48), (48, 98, 48), (15, 56, 48)]),
    palette!("vb", "Virtual Boy", [(230, 10, 40), (136, 10, 40), (68, 10, 40), (0, 0, 0)]),
    palette!("bw1", "Black and White 1", [(255, 255, 255), (0, 0, 0), (0, 0, 0), (0, 0, 0)]),
    palette!("bw2", "Black and White 2", [(255, 255, 255), (255, 255, 255), (0, 0, 0), (0, 0, 0)]),
    palette!("bw3", "Black and White 3", [(255, 255, 255), (255, 255, 255), (255, 255, 255), (0, 0, 0)]),
    palette!("sepia", "Sepia", [(245, 239, 188), (222, 195, 149), (178, 142, 110), (104, 60, 52)]),
    palette!("gbcm1", "GBCM 1", [(255, 255, 255), (160, 160, 160), (80, 80, 80), (0, 0, 0)]),
    palette!("gbcm2", "GBCM 2", [(155, 188, 15), (128, 159, 14), (48, 98, 48), (15, 56, 15)]),
    palette!("gbcm3", "GBCM 3", [(224, 248, 208), (136, 192, 112), (52, 104, 86), (8, 24, 32)]),
    palette!("gbcm4", "GBCM 4", [(255, 255, 255), (103, 228, 33), (14, 95, 175), (0, 0, 0)]),
    palette!("gbcm5", "GBCM 5", [(255, 239, 206), (222, 148, 75), (173, 41, 33), (49, 25, 82)]),
    palette!("b1", "Bonus 1", [(248, 227, 196), (204, 52, 149), (107, 31, 177), (11, 6, 48)]),
    palette!("b2", "Bonus 2", [(161, 239, 140), (63, 172, 149), (68, 97, 118), (44, 33, 55)]),
    palette!("b3", "Bonus 3", [(240, 240, 240), (143, 155, 246), (171, 70, 70), (22, 22, 22)]),
    palette!("b4", "Bonus 4", [(232, 214, 192), (146, 147, 141), (161, 40, 28), (0, 0, 0)]),
    palette!("b5", "Bonus 5", [(254, 208, 24), (211, 86, 0), (94, 18, 16), (13, 4, 5)]),
    palette!("b6", "Bonus 6", [(247, 219, 126), (224, 110, 22), (25, 105, 44), (20, 43, 35)]),
    palette!("b7", "Bonus 7", [(202, 245, 50), (116, 175, 52), (92, 79, 163), (86, 29, 23)]),
    palette!("b8", "Bonus 8", [(254, 208, 24), (143, 155, 246), (68, 97, 118), (13, 4, 5)]),
    palette!("b9", "Bonus 9", [(224, 198, 148), (148, 206, 224), (148, 158, 224), (97, 85, 62)]),
    palette!("b10", "Bonus 10", [(247, 231, 255), (148, 242, 167), (168, 135, 222), (44, 71, 21)]),
    palette!("b11", "Super Game Boy 2H with pure white", [(255, 255, 255), (191, 184, 191), (112, 112, 112), (0, 0, 0)]),
];

pub fn find(key: &str) -> Option<&'static Palette> {
    PALETTES.iter().find(|p| p.key == key)
}

pub fn keys() -> impl Iterator<Item = &'static str> {
    PALETTES.iter().map(|p| p.key)
}
