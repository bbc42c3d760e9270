// Benchmark helpers are only used from some bench targets, which the dead code
// lint can't see across files.
#[allow(dead_code)]
pub fn generate_page(sections: usize) -> String {
    let mut content = String::from("# Benchmark page\n\n");

    for section in 0..sections {
        content.push_str(&format!("## Section {section}\n\n"));
        content.push_str(
            "Paragraph with **bold**, _italic_ and `code` plus a [link](/section) \
             and an ![image](/img.png).\n\n",
        );
        content.push_str("> quoted line one\n> quoted line two\n\n");
        content.push_str("- first item\n- second _item_\n- third item\n\n");
        content.push_str("1. one\n2. two\n3. three\n\n");
        if section % 3 == 0 {
            content.push_str("```\nfn example() {\n    println!(\"<hi>\");\n}\n```\n\n");
        }
    }

    content
}

#[allow(dead_code)]
pub fn generate_inline_text(repeats: usize) -> String {
    "plain **bold** text with _italic_ and `code`, [a link](/x) and ![img](/i.png) "
        .repeat(repeats)
}
