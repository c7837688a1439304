//! Static SFM corpora used across harnesses.

/// The two-entry dictionary used as the reference scenario: `fel*` must
/// return only `cat`.
pub const SCENARIO: &str = "\\lx cat\n\\sn 1\n\\ge feline\n\\lx dog\n\\sn 1\n\\ge canine\n";

/// A small Toolbox export with the noise real files carry: a file header,
/// record markers the parser does not know, blank lines and indentation.
pub const SAMPLE_DICTIONARY: &str = r"\_sh v3.0  400  MDF 4.0
\_DateStampHasFourDigitYear

\lx kuri
\va kurii
\pdl Coastal
\pdv kuli
\hm 1
\sn 1
\ps n
\ge dog
\de domesticated canine kept for hunting
\sd animals
\so Smith 1998
\sn 2
\ps v
\ge follow
\de to walk behind someone
\dt 12/Mar/2004

\lx kuria
\sn 1
\ps n
\ge puppy
\sd animals

   \lx maka
   \sn 1
   \ps n
   \ge eye
   \nt body part, also used for springs
\sn 2
\ps n
\ge spring
\de source of fresh water

\lx tamaka
\sn 1
\ps adj
\ge blind
";

/// Lexemes of [`SAMPLE_DICTIONARY`], in file order.
pub const SAMPLE_LEXEMES: &[&str] = &["kuri", "kuria", "maka", "tamaka"];

/// [`SCENARIO`] with Windows line endings.
pub fn scenario_crlf() -> String {
    SCENARIO.replace('\n', "\r\n")
}

/// `n` generated entries, each with two senses, for throughput tests.
pub fn generated_dictionary(n: usize) -> String {
    let mut out = String::with_capacity(n * 96);
    for i in 0..n {
        out.push_str(&format!(
            "\\lx word{i}\n\\va wrd{i}\n\\sn 1\n\\ps n\n\\ge thing number {i}\n\
             \\sn 2\n\\ps v\n\\ge to do thing {i}\n\\de performs action {i}\n\n"
        ));
    }
    out
}
