//! # Vocabulário e Textos de Demonstração
//!
//! Dados fixos usados pelos testes e pela página de demonstração do servidor:
//! um glossário de lugares do relato da "Polenaktion" (outubro de 1938) e
//! trechos do próprio relato.

use crate::vocabulary::{GlossaryRecord, Vocabulary};

/// Frase com os três casos clássicos: composto com hífen, palavra solta e
/// concatenação sem fronteira.
pub const BENTSCHEN_TEXT: &str = "Ich ging von Neu-Bentschen nach Bentschen über AltBentschen. Da hat es lange gedauert bis ich endlich in Bentschen ankam.";

/// Saída esperada de [`BENTSCHEN_TEXT`] com [`bentschen_vocabulary`] e a configuração padrão.
pub const BENTSCHEN_EXPECTED: &str = "Ich ging von <span>Neu-Bentschen<note><term>Neu-Bentschen</term>Der Ortsteil Neu-Bentschen</note></span> nach <span>Bentschen<note><term>Bentschen</term>Der Ort Namens Bentschen</note></span> über AltBentschen. Da hat es lange gedauert bis ich endlich in <span>Bentschen<note><term>Bentschen</term>Der Ort Namens Bentschen</note></span> ankam.";

/// Trecho do relato em inglês, com markup HTML do editor de origem.
pub const TESTIMONY_EXCERPT: &str = "<p>We travelled through Hanover, Berlin, Frankfurt an der Oder to Neu-Bentschen. We were unloaded there and put onto a Polish train. Before this, our money was checked, but the officers were very generous. For example, I was permitted to keep RM 42.-, but another had to hand over RM 520. of RM 530.. We then travelled to Alt-Bentschen (Zbaszyn).</p>\n\
<p>On the way from Neu-Bentschen to Alt-Bentschen, we saw around 1000 people on the country road, among them the very old, young children, pushchairs etc. This was the transport from Hamburg, which had arrived at the Polish border</p>\n\
<p>We arrived in Alt-Bentschen on Saturday, 29 October at 7.30 pm. A train from Nuremberg was already standing at the platform of Alt-Bentschen train station, which had arrived one hour previously but was still locked.</p>\n\
<p>11,000 people were supposed to be in Alt-Bentschen at first, from Berlin, D&uuml;sseldorf, Wuppertal, Remscheidt, Stuttgart, Dortmund, Essen, Duisburg, Hamburg, Hanover, Cologne and some from Vienna. But on Monday, 31 October, a train from Alt-Bentschen, which intended to continue on, was stopped in Poznan.</p>";

/// Os três verbetes de Bentschen, na ordem em que a fonte os entrega.
pub fn bentschen_vocabulary() -> Vocabulary {
    Vocabulary::glossary(
        "Glossary",
        vec![
            GlossaryRecord::entry("Bentschen", "Bentschen", "Der Ort Namens Bentschen"),
            GlossaryRecord::entry("Alt-Bentschen", "Alt-Bentschen", "Der Ortsteil Alt-Bentschen"),
            GlossaryRecord::entry("Neu-Bentschen", "Neu-Bentschen", "Der Ortsteil Neu-Bentschen"),
        ],
    )
}

/// Glossário maior para a demonstração do servidor.
pub fn demo_vocabulary() -> Vocabulary {
    let mut vocabulary = bentschen_vocabulary();
    vocabulary.records.extend([
        GlossaryRecord::entry(
            "Zbaszyn",
            "Zbąszyń",
            "Polnischer Name von Bentschen; Grenzort, in dem im Oktober 1938 tausende ausgewiesene Juden festgehalten wurden.",
        ),
        GlossaryRecord::entry("Poznan", "Poznań", "Posen, Hauptstadt der Woiwodschaft Posen."),
        GlossaryRecord::entry(
            "Polenaktion",
            "Polenaktion",
            "Ausweisung von rund 17.000 Juden polnischer Staatsangehörigkeit aus dem Deutschen Reich, 27.–29. Oktober 1938.",
        ),
        GlossaryRecord::entry("Elberfeld", "Elberfeld", "Stadtteil von Wuppertal."),
        GlossaryRecord::entry("Frankfurt an der Oder", "Frankfurt (Oder)", "Grenzstadt an der Oder."),
        GlossaryRecord::entry("Reichsmark", "Reichsmark", "Währung des Deutschen Reichs 1924–1948 (RM)."),
    ]);
    vocabulary
}

/// Textos de demonstração: (domínio, texto).
pub fn demo_texts() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Ortsnamen", BENTSCHEN_TEXT),
        ("Zeugenbericht", TESTIMONY_EXCERPT),
        (
            "Polenaktion",
            "Am 28. Oktober war ich geschäftlich in Elberfeld. Bei der Polenaktion wurden rund 200 Polen verhaftet; ich durfte 45 Reichsmark behalten. Über Frankfurt an der Oder ging es nach Neu-Bentschen und zu Fuß weiter nach Zbaszyn.",
        ),
    ]
}
