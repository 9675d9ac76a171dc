//! The table of space-group settings, indexed by Hall number.
//!
//! Each of the 230 space-group types appears in its standard setting: unique axis `b` for
//! monoclinic groups, hexagonal axes for rhombohedral groups, and both origin choices, origin
//! choice 1 first, where two are tabulated.

/// A row of the space-group settings table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpaceGroupEntry {
    /// The space-group number, from 1 to 230.
    pub number: usize,

    /// The short Hermann–Mauguin symbol, with screw axes written as `2_1`.
    pub international: &'static str,

    /// The setting choice: `b` for the unique axis of monoclinic groups, `1` or `2` for the
    /// origin choice, `H` for hexagonal axes, or empty.
    pub choice: &'static str,

    /// The Hall symbol.
    pub hall_symbol: &'static str,
}

const fn entry(
    number: usize,
    international: &'static str,
    choice: &'static str,
    hall_symbol: &'static str,
) -> SpaceGroupEntry {
    SpaceGroupEntry {
        number,
        international,
        choice,
        hall_symbol,
    }
}

/// The number of tabulated settings.
pub const N_SETTINGS: usize = 254;

/// All tabulated settings in Hall-number order. The entry at index `i` has Hall number `i + 1`.
pub static SPACE_GROUP_TABLE: [SpaceGroupEntry; N_SETTINGS] = [
    entry(1, "P1", "", "P 1"),
    entry(2, "P-1", "", "-P 1"),
    entry(3, "P2", "b", "P 2y"),
    entry(4, "P2_1", "b", "P 2yb"),
    entry(5, "C2", "b", "C 2y"),
    entry(6, "Pm", "b", "P -2y"),
    entry(7, "Pc", "b", "P -2yc"),
    entry(8, "Cm", "b", "C -2y"),
    entry(9, "Cc", "b", "C -2yc"),
    entry(10, "P2/m", "b", "-P 2y"),
    entry(11, "P2_1/m", "b", "-P 2yb"),
    entry(12, "C2/m", "b", "-C 2y"),
    entry(13, "P2/c", "b", "-P 2yc"),
    entry(14, "P2_1/c", "b", "-P 2ybc"),
    entry(15, "C2/c", "b", "-C 2yc"),
    entry(16, "P222", "", "P 2 2"),
    entry(17, "P222_1", "", "P 2c 2"),
    entry(18, "P2_12_12", "", "P 2 2ab"),
    entry(19, "P2_12_12_1", "", "P 2ac 2ab"),
    entry(20, "C222_1", "", "C 2c 2"),
    entry(21, "C222", "", "C 2 2"),
    entry(22, "F222", "", "F 2 2"),
    entry(23, "I222", "", "I 2 2"),
    entry(24, "I2_12_12_1", "", "I 2b 2c"),
    entry(25, "Pmm2", "", "P 2 -2"),
    entry(26, "Pmc2_1", "", "P 2c -2"),
    entry(27, "Pcc2", "", "P 2 -2c"),
    entry(28, "Pma2", "", "P 2 -2a"),
    entry(29, "Pca2_1", "", "P 2c -2ac"),
    entry(30, "Pnc2", "", "P 2 -2bc"),
    entry(31, "Pmn2_1", "", "P 2ac -2"),
    entry(32, "Pba2", "", "P 2 -2ab"),
    entry(33, "Pna2_1", "", "P 2c -2n"),
    entry(34, "Pnn2", "", "P 2 -2n"),
    entry(35, "Cmm2", "", "C 2 -2"),
    entry(36, "Cmc2_1", "", "C 2c -2"),
    entry(37, "Ccc2", "", "C 2 -2c"),
    entry(38, "Amm2", "", "A 2 -2"),
    entry(39, "Aem2", "", "A 2 -2c"),
    entry(40, "Ama2", "", "A 2 -2a"),
    entry(41, "Aea2", "", "A 2 -2ac"),
    entry(42, "Fmm2", "", "F 2 -2"),
    entry(43, "Fdd2", "", "F 2 -2d"),
    entry(44, "Imm2", "", "I 2 -2"),
    entry(45, "Iba2", "", "I 2 -2c"),
    entry(46, "Ima2", "", "I 2 -2a"),
    entry(47, "Pmmm", "", "-P 2 2"),
    entry(48, "Pnnn", "1", "P 2 2 -1n"),
    entry(48, "Pnnn", "2", "-P 2ab 2bc"),
    entry(49, "Pccm", "", "-P 2 2c"),
    entry(50, "Pban", "1", "P 2 2 -1ab"),
    entry(50, "Pban", "2", "-P 2ab 2b"),
    entry(51, "Pmma", "", "-P 2a 2a"),
    entry(52, "Pnna", "", "-P 2a 2bc"),
    entry(53, "Pmna", "", "-P 2ac 2"),
    entry(54, "Pcca", "", "-P 2a 2ac"),
    entry(55, "Pbam", "", "-P 2 2ab"),
    entry(56, "Pccn", "", "-P 2ab 2ac"),
    entry(57, "Pbcm", "", "-P 2c 2b"),
    entry(58, "Pnnm", "", "-P 2 2n"),
    entry(59, "Pmmn", "1", "P 2 2ab -1ab"),
    entry(59, "Pmmn", "2", "-P 2ab 2a"),
    entry(60, "Pbcn", "", "-P 2n 2ab"),
    entry(61, "Pbca", "", "-P 2ac 2ab"),
    entry(62, "Pnma", "", "-P 2ac 2n"),
    entry(63, "Cmcm", "", "-C 2c 2"),
    entry(64, "Cmce", "", "-C 2bc 2"),
    entry(65, "Cmmm", "", "-C 2 2"),
    entry(66, "Cccm", "", "-C 2 2c"),
    entry(67, "Cmme", "", "-C 2b 2"),
    entry(68, "Ccce", "1", "C 2 2 -1bc"),
    entry(68, "Ccce", "2", "-C 2b 2bc"),
    entry(69, "Fmmm", "", "-F 2 2"),
    entry(70, "Fddd", "1", "F 2 2 -1d"),
    entry(70, "Fddd", "2", "-F 2uv 2vw"),
    entry(71, "Immm", "", "-I 2 2"),
    entry(72, "Ibam", "", "-I 2 2c"),
    entry(73, "Ibca", "", "-I 2b 2c"),
    entry(74, "Imma", "", "-I 2b 2"),
    entry(75, "P4", "", "P 4"),
    entry(76, "P4_1", "", "P 4w"),
    entry(77, "P4_2", "", "P 4c"),
    entry(78, "P4_3", "", "P 4cw"),
    entry(79, "I4", "", "I 4"),
    entry(80, "I4_1", "", "I 4bw"),
    entry(81, "P-4", "", "P -4"),
    entry(82, "I-4", "", "I -4"),
    entry(83, "P4/m", "", "-P 4"),
    entry(84, "P4_2/m", "", "-P 4c"),
    entry(85, "P4/n", "1", "P 4ab -1ab"),
    entry(85, "P4/n", "2", "-P 4a"),
    entry(86, "P4_2/n", "1", "P 4n -1n"),
    entry(86, "P4_2/n", "2", "-P 4bc"),
    entry(87, "I4/m", "", "-I 4"),
    entry(88, "I4_1/a", "1", "I 4bw -1bw"),
    entry(88, "I4_1/a", "2", "-I 4ad"),
    entry(89, "P422", "", "P 4 2"),
    entry(90, "P42_12", "", "P 4ab 2ab"),
    entry(91, "P4_122", "", "P 4w 2c"),
    entry(92, "P4_12_12", "", "P 4abw 2nw"),
    entry(93, "P4_222", "", "P 4c 2"),
    entry(94, "P4_22_12", "", "P 4n 2n"),
    entry(95, "P4_322", "", "P 4cw 2c"),
    entry(96, "P4_32_12", "", "P 4nw 2abw"),
    entry(97, "I422", "", "I 4 2"),
    entry(98, "I4_122", "", "I 4bw 2bw"),
    entry(99, "P4mm", "", "P 4 -2"),
    entry(100, "P4bm", "", "P 4 -2ab"),
    entry(101, "P4_2cm", "", "P 4c -2c"),
    entry(102, "P4_2nm", "", "P 4n -2n"),
    entry(103, "P4cc", "", "P 4 -2c"),
    entry(104, "P4nc", "", "P 4 -2n"),
    entry(105, "P4_2mc", "", "P 4c -2"),
    entry(106, "P4_2bc", "", "P 4c -2ab"),
    entry(107, "I4mm", "", "I 4 -2"),
    entry(108, "I4cm", "", "I 4 -2c"),
    entry(109, "I4_1md", "", "I 4bw -2"),
    entry(110, "I4_1cd", "", "I 4bw -2c"),
    entry(111, "P-42m", "", "P -4 2"),
    entry(112, "P-42c", "", "P -4 2c"),
    entry(113, "P-42_1m", "", "P -4 2ab"),
    entry(114, "P-42_1c", "", "P -4 2n"),
    entry(115, "P-4m2", "", "P -4 -2"),
    entry(116, "P-4c2", "", "P -4 -2c"),
    entry(117, "P-4b2", "", "P -4 -2ab"),
    entry(118, "P-4n2", "", "P -4 -2n"),
    entry(119, "I-4m2", "", "I -4 -2"),
    entry(120, "I-4c2", "", "I -4 -2c"),
    entry(121, "I-42m", "", "I -4 2"),
    entry(122, "I-42d", "", "I -4 2bw"),
    entry(123, "P4/mmm", "", "-P 4 2"),
    entry(124, "P4/mcc", "", "-P 4 2c"),
    entry(125, "P4/nbm", "1", "P 4 2 -1ab"),
    entry(125, "P4/nbm", "2", "-P 4a 2b"),
    entry(126, "P4/nnc", "1", "P 4 2 -1n"),
    entry(126, "P4/nnc", "2", "-P 4a 2bc"),
    entry(127, "P4/mbm", "", "-P 4 2ab"),
    entry(128, "P4/mnc", "", "-P 4 2n"),
    entry(129, "P4/nmm", "1", "P 4ab 2ab -1ab"),
    entry(129, "P4/nmm", "2", "-P 4a 2a"),
    entry(130, "P4/ncc", "1", "P 4ab 2n -1ab"),
    entry(130, "P4/ncc", "2", "-P 4a 2ac"),
    entry(131, "P4_2/mmc", "", "-P 4c 2"),
    entry(132, "P4_2/mcm", "", "-P 4c 2c"),
    entry(133, "P4_2/nbc", "1", "P 4n 2c -1n"),
    entry(133, "P4_2/nbc", "2", "-P 4ac 2b"),
    entry(134, "P4_2/nnm", "1", "P 4n 2 -1n"),
    entry(134, "P4_2/nnm", "2", "-P 4ac 2bc"),
    entry(135, "P4_2/mbc", "", "-P 4c 2ab"),
    entry(136, "P4_2/mnm", "", "-P 4n 2n"),
    entry(137, "P4_2/nmc", "1", "P 4n 2n -1n"),
    entry(137, "P4_2/nmc", "2", "-P 4ac 2a"),
    entry(138, "P4_2/ncm", "1", "P 4n 2ab -1n"),
    entry(138, "P4_2/ncm", "2", "-P 4ac 2ac"),
    entry(139, "I4/mmm", "", "-I 4 2"),
    entry(140, "I4/mcm", "", "-I 4 2c"),
    entry(141, "I4_1/amd", "1", "I 4bw 2bw -1bw"),
    entry(141, "I4_1/amd", "2", "-I 4bd 2"),
    entry(142, "I4_1/acd", "1", "I 4bw 2aw -1bw"),
    entry(142, "I4_1/acd", "2", "-I 4bd 2c"),
    entry(143, "P3", "", "P 3"),
    entry(144, "P3_1", "", "P 31"),
    entry(145, "P3_2", "", "P 32"),
    entry(146, "R3", "H", "R 3"),
    entry(147, "P-3", "", "-P 3"),
    entry(148, "R-3", "H", "-R 3"),
    entry(149, "P312", "", "P 3 2"),
    entry(150, "P321", "", "P 3 2\""),
    entry(151, "P3_112", "", "P 31 2c (0 0 1)"),
    entry(152, "P3_121", "", "P 31 2\""),
    entry(153, "P3_212", "", "P 32 2c (0 0 -1)"),
    entry(154, "P3_221", "", "P 32 2\""),
    entry(155, "R32", "H", "R 3 2\""),
    entry(156, "P3m1", "", "P 3 -2\""),
    entry(157, "P31m", "", "P 3 -2"),
    entry(158, "P3c1", "", "P 3 -2\"c"),
    entry(159, "P31c", "", "P 3 -2c"),
    entry(160, "R3m", "H", "R 3 -2\""),
    entry(161, "R3c", "H", "R 3 -2\"c"),
    entry(162, "P-31m", "", "-P 3 2"),
    entry(163, "P-31c", "", "-P 3 2c"),
    entry(164, "P-3m1", "", "-P 3 2\""),
    entry(165, "P-3c1", "", "-P 3 2\"c"),
    entry(166, "R-3m", "H", "-R 3 2\""),
    entry(167, "R-3c", "H", "-R 3 2\"c"),
    entry(168, "P6", "", "P 6"),
    entry(169, "P6_1", "", "P 61"),
    entry(170, "P6_5", "", "P 65"),
    entry(171, "P6_2", "", "P 62"),
    entry(172, "P6_4", "", "P 64"),
    entry(173, "P6_3", "", "P 6c"),
    entry(174, "P-6", "", "P -6"),
    entry(175, "P6/m", "", "-P 6"),
    entry(176, "P6_3/m", "", "-P 6c"),
    entry(177, "P622", "", "P 6 2"),
    entry(178, "P6_122", "", "P 61 2 (0 0 -1)"),
    entry(179, "P6_522", "", "P 65 2 (0 0 1)"),
    entry(180, "P6_222", "", "P 62 2c (0 0 1)"),
    entry(181, "P6_422", "", "P 64 2c (0 0 -1)"),
    entry(182, "P6_322", "", "P 6c 2c"),
    entry(183, "P6mm", "", "P 6 -2"),
    entry(184, "P6cc", "", "P 6 -2c"),
    entry(185, "P6_3cm", "", "P 6c -2"),
    entry(186, "P6_3mc", "", "P 6c -2c"),
    entry(187, "P-6m2", "", "P -6 2"),
    entry(188, "P-6c2", "", "P -6c 2"),
    entry(189, "P-62m", "", "P -6 -2"),
    entry(190, "P-62c", "", "P -6c -2c"),
    entry(191, "P6/mmm", "", "-P 6 2"),
    entry(192, "P6/mcc", "", "-P 6 2c"),
    entry(193, "P6_3/mcm", "", "-P 6c 2"),
    entry(194, "P6_3/mmc", "", "-P 6c 2c"),
    entry(195, "P23", "", "P 2 2 3"),
    entry(196, "F23", "", "F 2 2 3"),
    entry(197, "I23", "", "I 2 2 3"),
    entry(198, "P2_13", "", "P 2ac 2ab 3"),
    entry(199, "I2_13", "", "I 2b 2c 3"),
    entry(200, "Pm-3", "", "-P 2 2 3"),
    entry(201, "Pn-3", "1", "P 2 2 3 -1n"),
    entry(201, "Pn-3", "2", "-P 2ab 2bc 3"),
    entry(202, "Fm-3", "", "-F 2 2 3"),
    entry(203, "Fd-3", "1", "F 2 2 3 -1d"),
    entry(203, "Fd-3", "2", "-F 2uv 2vw 3"),
    entry(204, "Im-3", "", "-I 2 2 3"),
    entry(205, "Pa-3", "", "-P 2ac 2ab 3"),
    entry(206, "Ia-3", "", "-I 2b 2c 3"),
    entry(207, "P432", "", "P 4 2 3"),
    entry(208, "P4_232", "", "P 4n 2 3"),
    entry(209, "F432", "", "F 4 2 3"),
    entry(210, "F4_132", "", "F 4d 2 3"),
    entry(211, "I432", "", "I 4 2 3"),
    entry(212, "P4_332", "", "P 4acd 2ab 3"),
    entry(213, "P4_132", "", "P 4bd 2ab 3"),
    entry(214, "I4_132", "", "I 4bd 2c 3"),
    entry(215, "P-43m", "", "P -4 2 3"),
    entry(216, "F-43m", "", "F -4 2 3"),
    entry(217, "I-43m", "", "I -4 2 3"),
    entry(218, "P-43n", "", "P -4n 2 3"),
    entry(219, "F-43c", "", "F -4a 2 3"),
    entry(220, "I-43d", "", "I -4bd 2c 3"),
    entry(221, "Pm-3m", "", "-P 4 2 3"),
    entry(222, "Pn-3n", "1", "P 4 2 3 -1n"),
    entry(222, "Pn-3n", "2", "-P 4a 2bc 3"),
    entry(223, "Pm-3n", "", "-P 4n 2 3"),
    entry(224, "Pn-3m", "1", "P 4n 2 3 -1n"),
    entry(224, "Pn-3m", "2", "-P 4bc 2bc 3"),
    entry(225, "Fm-3m", "", "-F 4 2 3"),
    entry(226, "Fm-3c", "", "-F 4a 2 3"),
    entry(227, "Fd-3m", "1", "F 4d 2 3 -1d"),
    entry(227, "Fd-3m", "2", "-F 4vw 2vw 3"),
    entry(228, "Fd-3c", "1", "F 4d 2 3 -1ad"),
    entry(228, "Fd-3c", "2", "-F 4ud 2vw 3"),
    entry(229, "Im-3m", "", "-I 4 2 3"),
    entry(230, "Ia-3d", "", "-I 4bd 2c 3"),
];
