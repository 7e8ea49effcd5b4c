//! Built-in Shelton-style chord definitions
//!
//! Left hand keys produce word onsets, thumbs produce vowels, right hand keys
//! produce word endings. The same definitions are encoded for each supported
//! host locale.

use crate::types::*;
use super::encoding::{chord, ChordEntry};

pub const LEFT_HAND: &[ChordEntry] = &[
    chord(&[L_A], b"a"),
    chord(&[L_S], b"s"),
    chord(&[L_C], b"c"),
    chord(&[L_T], b"t"),
    chord(&[L_W], b"w"),
    chord(&[L_H], b"h"),
    chord(&[L_N], b"n"),
    chord(&[L_R], b"r"),
    // Letters without a key of their own
    chord(&[L_A, L_S], b"x"),
    chord(&[L_A, L_C], b"qu"),
    chord(&[L_A, L_T], b"z"),
    chord(&[L_A, L_H], b"y"),
    chord(&[L_T, L_N], b"d"),
    chord(&[L_C, L_W], b"g"),
    chord(&[L_C, L_T], b"k"),
    chord(&[L_W, L_N], b"m"),
    chord(&[L_H, L_R], b"l"),
    chord(&[L_C, L_N], b"p"),
    chord(&[L_T, L_W], b"b"),
    chord(&[L_S, L_W], b"f"),
    chord(&[L_S, L_R], b"v"),
    chord(&[L_S, L_C, L_T], b"j"),
    // Clusters
    chord(&[L_S, L_T], b"st"),
    chord(&[L_S, L_C], b"sc"),
    chord(&[L_S, L_H], b"sh"),
    chord(&[L_C, L_H], b"ch"),
    chord(&[L_T, L_H], b"th"),
    chord(&[L_W, L_H], b"wh"),
    chord(&[L_T, L_R], b"tr"),
    chord(&[L_C, L_R], b"cr"),
    chord(&[L_S, L_N], b"sn"),
    chord(&[L_S, L_C, L_H], b"sch"),
    chord(&[L_S, L_T, L_R], b"str"),
    chord(&[L_S, L_C, L_R], b"scr"),
    chord(&[L_T, L_H, L_R], b"thr"),
    chord(&[L_C, L_H, L_R], b"chr"),
    chord(&[L_S, L_H, L_R], b"shr"),
    chord(&[L_S, L_C, L_N, L_R], b"spr"),
    chord(&[L_S, L_C, L_N, L_H, L_R], b"spl"),
];

pub const THUMBS: &[ChordEntry] = &[
    chord(&[T_A], b"a"),
    chord(&[T_O], b"o"),
    chord(&[T_E], b"e"),
    chord(&[T_U], b"u"),
    chord(&[T_E, T_U], b"i"),
    chord(&[T_A, T_O], b"oo"),
    chord(&[T_A, T_E], b"ea"),
    chord(&[T_O, T_U], b"ou"),
    chord(&[T_A, T_U], b"au"),
    chord(&[T_O, T_E], b"oi"),
    chord(&[T_A, T_O, T_E], b"ee"),
    chord(&[T_O, T_E, T_U], b"io"),
    chord(&[T_A, T_E, T_U], b"ai"),
    chord(&[T_A, T_O, T_U], b"y"),
    chord(&[T_A, T_O, T_E, T_U], b"ie"),
];

pub const RIGHT_HAND: &[ChordEntry] = &[
    chord(&[R_R], b"r"),
    chord(&[R_N], b"n"),
    chord(&[R_L], b"l"),
    chord(&[R_G], b"g"),
    chord(&[R_C], b"c"),
    chord(&[R_H], b"h"),
    chord(&[R_T], b"t"),
    chord(&[R_S], b"s"),
    chord(&[R_L, R_G], b"d"),
    chord(&[R_R, R_C], b"p"),
    chord(&[R_L, R_C], b"m"),
    chord(&[R_R, R_H], b"f"),
    chord(&[R_G, R_C], b"x"),
    chord(&[R_N, R_G], b"ng"),
    chord(&[R_G, R_H], b"gh"),
    chord(&[R_C, R_H], b"ch"),
    chord(&[R_H, R_T], b"th"),
    chord(&[R_N, R_T], b"nt"),
    chord(&[R_N, R_C], b"nc"),
    chord(&[R_N, R_H], b"nk"),
    chord(&[R_T, R_S], b"ts"),
    chord(&[R_N, R_S], b"ns"),
    chord(&[R_R, R_S], b"rs"),
    chord(&[R_G, R_S], b"gs"),
    chord(&[R_L, R_S], b"ss"),
    chord(&[R_L, R_H], b"ll"),
    chord(&[R_L, R_T], b"lt"),
    chord(&[R_C, R_T], b"ct"),
    chord(&[R_R, R_T], b"rt"),
    chord(&[R_R, R_N], b"rn"),
    chord(&[R_R, R_L], b"rl"),
    chord(&[R_N, R_G, R_S], b"ngs"),
    chord(&[R_C, R_H, R_T], b"tch"),
    chord(&[R_G, R_H, R_T], b"ght"),
    chord(&[R_N, R_C, R_H], b"nch"),
    chord(&[R_R, R_T, R_S], b"rts"),
    chord(&[R_C, R_H, R_T, R_S], b"tches"),
    chord(&[R_N, R_G, R_H, R_T, R_S], b"ngths"),
];

pub const SPACES: &[ChordEntry] = &[
    chord(&[S_SPC], b" "),
    chord(&[S_BSPC], b"\x08"),
    chord(&[S_TAB], b"\t"),
    chord(&[S_RET], b"\n"),
    chord(&[S_SPC, S_RET], b"\n\n"),
    chord(&[S_TAB, S_RET], b"\n\t"),
    chord(&[S_SPC, S_BSPC], b"\x08 "),
];
