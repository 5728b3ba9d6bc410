/// Row variants and sound changes of a single godan terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Godan {
    pub(super) a: &'static str,
    pub(super) i: &'static str,
    pub(super) u: &'static str,
    pub(super) e: &'static str,
    pub(super) o: &'static str,
    pub(super) te: &'static str,
    pub(super) past: &'static str,
}

impl Godan {
    /// Look up the table for the given terminal kana.
    pub(super) fn from_terminal(c: char) -> Option<&'static Godan> {
        let table = match c {
            'う' => U,
            'つ' => TSU,
            'る' => RU,
            'く' => KU,
            'ぐ' => GU,
            'む' => MU,
            'ぶ' => BU,
            'ぬ' => NU,
            'す' => SU,
            _ => return None,
        };

        Some(table)
    }
}

/// The U godan table.
pub(super) static U: &Godan = &Godan {
    a: "わ",
    i: "い",
    u: "う",
    e: "え",
    o: "お",
    te: "って",
    past: "った",
};

/// The TSU godan table.
pub(super) static TSU: &Godan = &Godan {
    a: "た",
    i: "ち",
    u: "つ",
    e: "て",
    o: "と",
    te: "って",
    past: "った",
};

/// The RU godan table.
pub(super) static RU: &Godan = &Godan {
    a: "ら",
    i: "り",
    u: "る",
    e: "れ",
    o: "ろ",
    te: "って",
    past: "った",
};

/// The KU godan table.
pub(super) static KU: &Godan = &Godan {
    a: "か",
    i: "き",
    u: "く",
    e: "け",
    o: "こ",
    te: "いて",
    past: "いた",
};

/// The GU godan table.
pub(super) static GU: &Godan = &Godan {
    a: "が",
    i: "ぎ",
    u: "ぐ",
    e: "げ",
    o: "ご",
    te: "いで",
    past: "いだ",
};

/// The MU godan table.
pub(super) static MU: &Godan = &Godan {
    a: "ま",
    i: "み",
    u: "む",
    e: "め",
    o: "も",
    te: "んで",
    past: "んだ",
};

/// The BU godan table.
pub(super) static BU: &Godan = &Godan {
    a: "ば",
    i: "び",
    u: "ぶ",
    e: "べ",
    o: "ぼ",
    te: "んで",
    past: "んだ",
};

/// The NU godan table.
pub(super) static NU: &Godan = &Godan {
    a: "な",
    i: "に",
    u: "ぬ",
    e: "ね",
    o: "の",
    te: "んで",
    past: "んだ",
};

/// The SU godan table.
pub(super) static SU: &Godan = &Godan {
    a: "さ",
    i: "し",
    u: "す",
    e: "せ",
    o: "そ",
    te: "して",
    past: "した",
};

/// The IKU/YUKU godan table, a KU table with the sound change of the TSU
/// table.
pub(super) static IKU: &Godan = &Godan {
    a: "か",
    i: "き",
    u: "く",
    e: "け",
    o: "こ",
    te: "って",
    past: "った",
};
