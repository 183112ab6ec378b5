//! Test fixtures shared across unit tests, integration tests, benches, and fuzzing.
//!
//! This module is always compiled but hidden from documentation.
//! It holds the canonical sample table so it isn't retyped in five places.

#![doc(hidden)]

/// A known-good `(decoded, encoded)` pair.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub description: &'static str,
    pub decoded: &'static str,
    pub encoded: &'static str,
}

const fn sample(description: &'static str, decoded: &'static str, encoded: &'static str) -> Sample {
    Sample {
        description,
        decoded,
        encoded,
    }
}

/// RFC 3492 §7.1 sample strings.
///
/// Mixed-case annotations are dropped: the encoded forms are what this
/// encoder emits, all digits lowercase.
pub const RFC3492_SAMPLES: &[Sample] = &[
    sample(
        "(A) Arabic (Egyptian)",
        "\u{644}\u{64A}\u{647}\u{645}\u{627}\u{628}\u{62A}\u{643}\u{644}\u{645}\u{648}\u{634}\u{639}\u{631}\u{628}\u{64A}\u{61F}",
        "egbpdaj6bu4bxfgehfvwxn",
    ),
    sample(
        "(B) Chinese (simplified)",
        "他们为什么不说中文",
        "ihqwcrb4cv8a8dqg056pqjye",
    ),
    sample(
        "(C) Chinese (traditional)",
        "他們爲什麽不說中文",
        "ihqwctvzc91f659drss3x8bo0yb",
    ),
    sample(
        "(D) Czech",
        "Pročprostěnemluvíčesky",
        "Proprostnemluvesky-uyb24dma41a",
    ),
    sample(
        "(E) Hebrew",
        "\u{5DC}\u{5DE}\u{5D4}\u{5D4}\u{5DD}\u{5E4}\u{5E9}\u{5D5}\u{5D8}\u{5DC}\u{5D0}\u{5DE}\u{5D3}\u{5D1}\u{5E8}\u{5D9}\u{5DD}\u{5E2}\u{5D1}\u{5E8}\u{5D9}\u{5EA}",
        "4dbcagdahymbxekheh6e0a7fei0b",
    ),
    sample(
        "(F) Hindi (Devanagari)",
        "यहलोगहिन्दीक्योंनहींबोलसकतेहैं",
        "i1baa7eci9glrd9b2ae1bj0hfcgg6iyaf8o0a1dig0cd",
    ),
    sample(
        "(G) Japanese (kanji and hiragana)",
        "なぜみんな日本語を話してくれないのか",
        "n8jok5ay5dzabd5bym9f0cm5685rrjetr6pdxa",
    ),
    sample(
        "(H) Korean (Hangul syllables)",
        "세계의모든사람들이한국어를이해한다면얼마나좋을까",
        "989aomsvi5e83db1d2a355cv1e0vak1dwrv93d5xbh15a0dt30a5jpsd879ccm6fea98c",
    ),
    sample(
        "(I) Russian (Cyrillic)",
        "почемужеонинеговорятпорусски",
        "b1abfaaepdrnnbgefbadotcwatmq2g4l",
    ),
    sample(
        "(J) Spanish",
        "PorquénopuedensimplementehablarenEspañol",
        "PorqunopuedensimplementehablarenEspaol-fmd56a",
    ),
    sample(
        "(K) Vietnamese",
        "TạisaohọkhôngthểchỉnóitiếngViệt",
        "TisaohkhngthchnitingVit-kjcr8268qyxafd2f1b9g",
    ),
    sample(
        "(L) 3<nen>B<gumi><kinpachi><sensei>",
        "3年B組金八先生",
        "3B-ww4c5e180e575a65lsy2b",
    ),
    sample(
        "(M) <amuro><namie>-with-SUPER-MONKEYS",
        "安室奈美恵-with-SUPER-MONKEYS",
        "-with-SUPER-MONKEYS-pc58ag80a8qai00g7n9n",
    ),
    sample(
        "(N) Hello-Another-Way-<sorezore><no><basho>",
        "Hello-Another-Way-それぞれの場所",
        "Hello-Another-Way--fc4qua05auwb3674vfr0b",
    ),
    sample(
        "(O) <hitotsu><yane><no><shita>2",
        "ひとつ屋根の下2",
        "2-u9tlzr9756bt3uc0v",
    ),
    sample(
        "(P) Maji<de>Koi<suru>5<byou><mae>",
        "MajiでKoiする5秒前",
        "MajiKoi5-783gue6qz075azm5e",
    ),
    sample(
        "(Q) <pafii>de<runba>",
        "パフィーdeルンバ",
        "de-jg4avhby1noc0d",
    ),
    sample("(R) <sono><supiido><de>", "そのスピードで", "d9juau41awczczp"),
];

/// Everyday labels, including the ones from the IDNA examples.
pub const LABEL_SAMPLES: &[Sample] = &[
    sample("German umlaut", "bücher", "bcher-kva"),
    sample("German umlaut", "münchen", "mnchen-3ya"),
    sample("German sharp s", "straße", "strae-oqa"),
    sample("Spanish", "viva-españa", "viva-espaa-19a"),
    sample("single non-ASCII", "ü", "tda"),
    sample("Cyrillic TLD", "рф", "p1ai"),
    sample("Cyrillic with hyphens", "погода-в-египте", "---6kcjcecmb3a1dbkl9b"),
    sample("(S) -> $1.00 <-", "-> $1.00 <-", "-> $1.00 <--"),
];

/// Every sample, RFC first.
pub fn all_samples() -> impl Iterator<Item = &'static Sample> {
    RFC3492_SAMPLES.iter().chain(LABEL_SAMPLES.iter())
}
