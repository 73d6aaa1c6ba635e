//! Key schedules of the individual CPU parts.
//!
//! Entry `row * 2` applies to opcode fetches and `row * 2 + 1` to data reads.
//! Swap values index [`crate::SWAP_TABLE`].
use crate::schedule::{MASTER_LEN, SCHEDULE_LEN};

#[rustfmt::skip]
pub(crate) static XOR_315_5136: [u8; SCHEDULE_LEN] = [
    0x00, 0x40, 0x10, 0x50, 0x04, 0x44, 0x14, 0x54, 0x01, 0x41, 0x11, 0x51, 0x05, 0x45, 0x15, 0x55,
    0x00, 0x40, 0x10, 0x50, 0x04, 0x44, 0x14, 0x54, 0x01, 0x41, 0x11, 0x51, 0x05, 0x45, 0x15, 0x55,
    0x00, 0x40, 0x10, 0x50, 0x04, 0x44, 0x14, 0x54, 0x01, 0x41, 0x11, 0x51, 0x05, 0x45, 0x15, 0x55,
    0x00, 0x40, 0x10, 0x50, 0x04, 0x44, 0x14, 0x54, 0x01, 0x41, 0x11, 0x51, 0x05, 0x45, 0x15, 0x55,
    0x50, 0x10, 0x44, 0x04, 0x54, 0x14, 0x41, 0x01, 0x51, 0x11, 0x45, 0x05, 0x55, 0x15, 0x40, 0x00,
    0x50, 0x10, 0x44, 0x04, 0x54, 0x14, 0x41, 0x01, 0x51, 0x11, 0x45, 0x05, 0x55, 0x15, 0x40, 0x00,
    0x50, 0x10, 0x44, 0x04, 0x54, 0x14, 0x41, 0x01, 0x51, 0x11, 0x45, 0x05, 0x55, 0x15, 0x40, 0x00,
    0x50, 0x10, 0x44, 0x04, 0x54, 0x14, 0x41, 0x01, 0x51, 0x11, 0x45, 0x05, 0x55, 0x15, 0x40, 0x00,
];

#[rustfmt::skip]
pub(crate) static SWAP_315_5136: [u8; SCHEDULE_LEN] = [
    20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20, 20,
    21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21, 21,
    22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22, 22,
    23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23, 23,
     0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  1,  1,
     1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  2,  2,
     2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  2,  3,  3,
     3,  3,  3,  3,  3,  3,  3,  3,  3,  3,  3,  3,  3,  3,  4,  4,
];

#[rustfmt::skip]
pub(crate) static XOR_315_5162: [u8; SCHEDULE_LEN] = [
    0x40, 0x10, 0x50, 0x04, 0x44, 0x14, 0x54, 0x01, 0x41, 0x11, 0x51, 0x05, 0x45, 0x15, 0x55, 0x00,
    0x40, 0x10, 0x50, 0x04, 0x44, 0x14, 0x54, 0x01, 0x41, 0x11, 0x51, 0x05, 0x45, 0x15, 0x55, 0x00,
    0x40, 0x10, 0x50, 0x04, 0x44, 0x14, 0x54, 0x01, 0x41, 0x11, 0x51, 0x05, 0x45, 0x15, 0x55, 0x00,
    0x40, 0x10, 0x50, 0x04, 0x44, 0x14, 0x54, 0x01, 0x41, 0x11, 0x51, 0x05, 0x45, 0x15, 0x55, 0x00,
    0x40, 0x10, 0x50, 0x04, 0x44, 0x14, 0x54, 0x01, 0x41, 0x11, 0x51, 0x05, 0x45, 0x15, 0x55, 0x00,
    0x40, 0x10, 0x50, 0x04, 0x44, 0x14, 0x54, 0x01, 0x41, 0x11, 0x51, 0x05, 0x45, 0x15, 0x55, 0x00,
    0x40, 0x10, 0x50, 0x04, 0x44, 0x14, 0x54, 0x01, 0x41, 0x11, 0x51, 0x05, 0x45, 0x15, 0x55, 0x00,
    0x40, 0x10, 0x50, 0x04, 0x44, 0x14, 0x54, 0x01, 0x41, 0x11, 0x51, 0x05, 0x45, 0x15, 0x55, 0x00,
];

#[rustfmt::skip]
pub(crate) static SWAP_315_5162: [u8; SCHEDULE_LEN] = [
     4,  4,  4,  4,  4,  4,  4,  4,  4,  4,  4,  4,  4,  4,  4,  5,
     5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  6,
     6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  6,  7,
     7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  7,  8,
     8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  8,  9,
     9,  9,  9,  9,  9,  9,  9,  9,  9,  9,  9,  9,  9,  9,  9, 10,
    10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 11,
    11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 12,
];

#[rustfmt::skip]
pub(crate) static XOR_315_5176: [u8; SCHEDULE_LEN] = [
    0x44, 0x01, 0x51, 0x15, 0x40, 0x04, 0x54, 0x11, 0x45, 0x00, 0x50, 0x14, 0x41, 0x05, 0x55, 0x10,
    0x44, 0x01, 0x51, 0x15, 0x40, 0x04, 0x54, 0x11, 0x45, 0x00, 0x50, 0x14, 0x41, 0x05, 0x55, 0x10,
    0x44, 0x01, 0x51, 0x15, 0x40, 0x04, 0x54, 0x11, 0x45, 0x00, 0x50, 0x14, 0x41, 0x05, 0x55, 0x10,
    0x44, 0x01, 0x51, 0x15, 0x40, 0x04, 0x54, 0x11, 0x45, 0x00, 0x50, 0x14, 0x41, 0x05, 0x55, 0x10,
    0x44, 0x01, 0x51, 0x15, 0x40, 0x04, 0x54, 0x11, 0x45, 0x00, 0x50, 0x14, 0x41, 0x05, 0x55, 0x10,
    0x44, 0x01, 0x51, 0x15, 0x40, 0x04, 0x54, 0x11, 0x45, 0x00, 0x50, 0x14, 0x41, 0x05, 0x55, 0x10,
    0x44, 0x01, 0x51, 0x15, 0x40, 0x04, 0x54, 0x11, 0x45, 0x00, 0x50, 0x14, 0x41, 0x05, 0x55, 0x10,
    0x44, 0x01, 0x51, 0x15, 0x40, 0x04, 0x54, 0x11, 0x45, 0x00, 0x50, 0x14, 0x41, 0x05, 0x55, 0x10,
];

#[rustfmt::skip]
pub(crate) static SWAP_315_5176: [u8; SCHEDULE_LEN] = [
     0,  0,  0,  0,  1,  1,  1,  1,  1,  2,  2,  2,  2,  2,  2,  3,
     3,  3,  3,  3,  4,  4,  4,  4,  4,  5,  5,  5,  5,  5,  5,  6,
     6,  6,  6,  6,  7,  7,  7,  7,  7,  8,  8,  8,  8,  8,  8,  9,
     9,  9,  9,  9, 10, 10, 10, 10, 10, 11, 11, 11, 11, 11, 11, 12,
     8,  8,  8,  8,  9,  9,  9,  9,  9, 10, 10, 10, 10, 10, 10, 11,
    11, 11, 11, 11, 12, 12, 12, 12, 12, 13, 13, 13, 13, 13, 13, 14,
    14, 14, 14, 14, 15, 15, 15, 15, 15, 16, 16, 16, 16, 16, 16, 17,
    17, 17, 17, 17, 18, 18, 18, 18, 18, 19, 19, 19, 19, 19, 19, 20,
];

#[rustfmt::skip]
pub(crate) static XOR_315_5177: [u8; SCHEDULE_LEN] = [
    0x04, 0x54, 0x51, 0x15, 0x40, 0x44, 0x01, 0x51, 0x55, 0x10, 0x44, 0x41, 0x05, 0x55, 0x50, 0x14,
    0x41, 0x45, 0x00, 0x50, 0x54, 0x11, 0x45, 0x40, 0x04, 0x54, 0x51, 0x15, 0x40, 0x44, 0x01, 0x51,
    0x55, 0x10, 0x44, 0x41, 0x05, 0x55, 0x50, 0x14, 0x41, 0x45, 0x00, 0x50, 0x54, 0x11, 0x45, 0x40,
    0x04, 0x54, 0x51, 0x15, 0x40, 0x44, 0x01, 0x51, 0x55, 0x10, 0x44, 0x41, 0x05, 0x55, 0x50, 0x14,
    0x04, 0x54, 0x51, 0x15, 0x40, 0x44, 0x01, 0x51, 0x55, 0x10, 0x44, 0x41, 0x05, 0x55, 0x50, 0x14,
    0x41, 0x45, 0x00, 0x50, 0x54, 0x11, 0x45, 0x40, 0x04, 0x54, 0x51, 0x15, 0x40, 0x44, 0x01, 0x51,
    0x55, 0x10, 0x44, 0x41, 0x05, 0x55, 0x50, 0x14, 0x41, 0x45, 0x00, 0x50, 0x54, 0x11, 0x45, 0x40,
    0x04, 0x54, 0x51, 0x15, 0x40, 0x44, 0x01, 0x51, 0x55, 0x10, 0x44, 0x41, 0x05, 0x55, 0x50, 0x14,
];

#[rustfmt::skip]
pub(crate) static SWAP_315_5177: [u8; SCHEDULE_LEN] = [
     0,  0,  0,  0,  1,  1,  1,  1,  1,  2,  2,  2,  2,  2,  3,  3,
     3,  3,  4,  4,  4,  4,  4,  5,  5,  5,  5,  5,  6,  6,  6,  6,
     6,  7,  7,  7,  7,  7,  8,  8,  8,  8,  9,  9,  9,  9,  9, 10,
    10, 10, 10, 10, 11, 11, 11, 11, 11, 12, 12, 12, 12, 12, 13, 13,
     8,  8,  8,  8,  9,  9,  9,  9,  9, 10, 10, 10, 10, 10, 11, 11,
    11, 11, 12, 12, 12, 12, 12, 13, 13, 13, 13, 13, 14, 14, 14, 14,
    14, 15, 15, 15, 15, 15, 16, 16, 16, 16, 17, 17, 17, 17, 17, 18,
    18, 18, 18, 18, 19, 19, 19, 19, 19, 20, 20, 20, 20, 20, 21, 21,
];

#[rustfmt::skip]
pub(crate) static XOR_315_5178: [u8; SCHEDULE_LEN] = [
    0x00, 0x55, 0x45, 0x05, 0x11, 0x41, 0x01, 0x14, 0x44, 0x50, 0x10, 0x00, 0x55, 0x15, 0x05, 0x51,
    0x41, 0x01, 0x14, 0x44, 0x04, 0x10, 0x40, 0x55, 0x15, 0x05, 0x51, 0x11, 0x01, 0x54, 0x44, 0x04,
    0x10, 0x40, 0x00, 0x15, 0x45, 0x51, 0x11, 0x01, 0x54, 0x14, 0x04, 0x50, 0x40, 0x00, 0x15, 0x45,
    0x05, 0x11, 0x41, 0x54, 0x14, 0x04, 0x50, 0x10, 0x00, 0x55, 0x45, 0x05, 0x11, 0x41, 0x01, 0x14,
    0x00, 0x55, 0x45, 0x05, 0x11, 0x41, 0x01, 0x14, 0x44, 0x50, 0x10, 0x00, 0x55, 0x15, 0x05, 0x51,
    0x41, 0x01, 0x14, 0x44, 0x04, 0x10, 0x40, 0x55, 0x15, 0x05, 0x51, 0x11, 0x01, 0x54, 0x44, 0x04,
    0x10, 0x40, 0x00, 0x15, 0x45, 0x51, 0x11, 0x01, 0x54, 0x14, 0x04, 0x50, 0x40, 0x00, 0x15, 0x45,
    0x05, 0x11, 0x41, 0x54, 0x14, 0x04, 0x50, 0x10, 0x00, 0x55, 0x45, 0x05, 0x11, 0x41, 0x01, 0x14,
];

#[rustfmt::skip]
pub(crate) static SWAP_315_5178: [u8; SCHEDULE_LEN] = [
     2,  3,  5,  7,  1,  3,  5,  7,  1,  3,  5,  7,  0,  2,  4,  6,
     0,  2,  4,  6,  0,  2,  4,  5,  7,  1,  3,  5,  7,  1,  3,  5,
     7,  1,  3,  4,  6,  0,  2,  4,  6,  0,  2,  4,  6,  8,  1,  3,
     5,  7,  1,  3,  5,  7,  1,  3,  5,  6,  0,  2,  4,  6,  0,  2,
    10, 11, 13, 15,  9, 11, 13, 15,  9, 11, 13, 15,  8, 10, 12, 14,
     8, 10, 12, 14,  8, 10, 12, 13, 15,  9, 11, 13, 15,  9, 11, 13,
    15,  9, 11, 12, 14,  8, 10, 12, 14,  8, 10, 12, 14, 16,  9, 11,
    13, 15,  9, 11, 13, 15,  9, 11, 13, 14,  8, 10, 12, 14,  8, 10,
];

#[rustfmt::skip]
pub(crate) static XOR_315_5179: [u8; SCHEDULE_LEN] = [
    0x00, 0x45, 0x41, 0x14, 0x10, 0x55, 0x51, 0x01, 0x04, 0x40, 0x45, 0x11, 0x14, 0x50, 0x00, 0x05,
    0x41, 0x44, 0x10, 0x15, 0x51, 0x54, 0x04, 0x00, 0x45, 0x41, 0x14, 0x10, 0x55, 0x05, 0x01, 0x44,
    0x40, 0x15, 0x11, 0x54, 0x50, 0x00, 0x05, 0x41, 0x44, 0x10, 0x15, 0x51, 0x01, 0x04, 0x40, 0x45,
    0x11, 0x14, 0x50, 0x55, 0x05, 0x01, 0x44, 0x40, 0x15, 0x11, 0x54, 0x04, 0x00, 0x45, 0x41, 0x14,
    0x50, 0x00, 0x05, 0x41, 0x44, 0x10, 0x15, 0x51, 0x54, 0x04, 0x00, 0x45, 0x41, 0x14, 0x50, 0x55,
    0x05, 0x01, 0x44, 0x40, 0x15, 0x11, 0x54, 0x50, 0x00, 0x05, 0x41, 0x44, 0x10, 0x55, 0x51, 0x01,
    0x04, 0x40, 0x45, 0x11, 0x14, 0x50, 0x55, 0x05, 0x01, 0x44, 0x40, 0x15, 0x51, 0x54, 0x04, 0x00,
    0x45, 0x41, 0x14, 0x10, 0x55, 0x51, 0x01, 0x04, 0x40, 0x45, 0x11, 0x54, 0x50, 0x00, 0x05, 0x41,
];

#[rustfmt::skip]
pub(crate) static SWAP_315_5179: [u8; SCHEDULE_LEN] = [
     8,  9, 11, 13, 15,  0,  2,  4,  6,  8,  9, 11, 13, 15,  1,  2,
     4,  6,  8,  9, 11, 13, 15,  1,  2,  4,  6,  8,  9, 11, 13, 15,
     1,  2,  4,  6,  8, 10, 11, 13, 15,  1,  2,  4,  6,  8, 10, 11,
    13, 15,  1,  2,  4,  6,  8, 10, 11, 13, 15,  1,  3,  4,  6,  8,
     7,  1,  2,  4,  6,  0,  1,  3,  5,  7,  1,  2,  4,  6,  0,  1,
     3,  5,  7,  1,  2,  4,  6,  0,  2,  3,  5,  7,  1,  2,  4,  6,
     0,  2,  3,  5,  7,  1,  2,  4,  6,  0,  2,  3,  5,  7,  1,  3,
     4,  6,  0,  2,  3,  5,  7,  1,  3,  4,  6,  0,  2,  4,  5,  7,
];

// The 317-000x parts all read their key from this table, each starting a few
// entries further in.

#[rustfmt::skip]
pub(crate) static XOR_317_MASTER: [u8; MASTER_LEN] = [
    0x04, 0x54, 0x44, 0x14, 0x15, 0x15, 0x51, 0x41, 0x41, 0x14, 0x10, 0x50, 0x15, 0x55, 0x54, 0x05,
    0x04, 0x41, 0x51, 0x01, 0x05, 0x10, 0x55, 0x51, 0x05, 0x05, 0x54, 0x11, 0x45, 0x05, 0x04, 0x14,
    0x10, 0x55, 0x01, 0x41, 0x51, 0x05, 0x55, 0x04, 0x45, 0x41, 0x55, 0x14, 0x45, 0x10, 0x04, 0x45,
    0x55, 0x50, 0x40, 0x00, 0x11, 0x45, 0x15, 0x00, 0x01, 0x00, 0x40, 0x00, 0x01, 0x45, 0x11, 0x00,
    0x45, 0x00, 0x44, 0x54, 0x40, 0x04, 0x05, 0x15, 0x15, 0x10, 0x15, 0x04, 0x01, 0x05, 0x50, 0x11,
    0x00, 0x44, 0x44, 0x04, 0x04, 0x01, 0x50, 0x05, 0x51, 0x00, 0x45, 0x44, 0x50, 0x15, 0x54, 0x40,
    0x41, 0x45, 0x40, 0x10, 0x14, 0x15, 0x40, 0x51, 0x50, 0x50, 0x45, 0x00, 0x10, 0x15, 0x05, 0x51,
    0x50, 0x44, 0x01, 0x15, 0x40, 0x04, 0x01, 0x44, 0x50, 0x44, 0x50, 0x50, 0x50, 0x10, 0x44, 0x04,
    0x40, 0x04, 0x10,
];

#[rustfmt::skip]
pub(crate) static SWAP_317_MASTER: [u8; MASTER_LEN] = [
     7,  7, 12,  1, 18, 11,  8, 23, 21, 17,  0, 23, 22,  0, 21, 15,
    13, 19, 21, 20, 20, 12, 13, 10, 20,  0, 14, 18,  6, 18,  3,  5,
     5, 20, 20, 13,  8,  0, 20, 18,  4, 14,  8,  5, 17,  6, 22, 10,
     0, 21,  0,  1,  6, 11, 17,  9, 17,  3,  9, 21,  0,  4, 16,  1,
    13, 17, 21,  5,  3,  7,  2, 16, 18, 13,  6, 19, 11, 23,  3, 20,
     3,  2, 18, 10, 18, 23, 19, 23,  3, 15,  0, 10,  5, 12,  0,  0,
    11, 22,  8, 14,  8,  6,  1, 15,  7, 11,  2, 17, 10, 15,  8, 21,
    10,  0,  2,  6,  1,  1,  3,  1, 12, 18, 16,  5,  0, 15, 17, 15,
    10, 20,  1,
];
