pub use util::*;

mod util;

solutions![
    (y2021, [d1, d2, d3, d4, d5]),
    (y2022, [d16]),
    (
        y2023,
        [d1, d2, d3, d4, d5, d6, d7, d8, d9, d10, d11, d12, d13, d14, d15, d16, d17]
    ),
    (y2024, [d1, d2, d3, d4, d5, d6, d7, d8]),
];
