//! Snapshot tests for rendered markup.

use ansiboard::ansi_to_html;

#[test]
fn snapshot_red_hello() {
    insta::assert_snapshot!(
        ansi_to_html("\x1b[31mHello\x1b[0m World"),
        @r#"<span style="color: #cc0000">Hello</span> World"#
    );
}

#[test]
fn snapshot_alias_bold() {
    insta::assert_snapshot!(
        ansi_to_html("^[[1mBold^[[0m"),
        @r#"<span style="font-weight: bold">Bold</span>"#
    );
}

#[test]
fn snapshot_discarded_erase() {
    insta::assert_snapshot!(ansi_to_html("\x1b[2Kok"), @"ok");
}

#[test]
fn snapshot_cube_color_left_open() {
    insta::assert_snapshot!(
        ansi_to_html("\x1b[38;5;196mX"),
        @r#"<span style="color: rgb(255, 0, 0)">X</span>"#
    );
}

#[test]
fn snapshot_bbs_menu_line() {
    insta::assert_snapshot!(
        ansi_to_html("^[[1;34m[^[[36mM^[[34m]^[[0;37m Message bases^[[0m"),
        @r#"<span style="font-weight: bold; color: #3465a4">[</span><span style="font-weight: bold; color: #06989a">M</span><span style="font-weight: bold; color: #3465a4">]</span><span style="color: #d3d7cf"> Message bases</span>"#
    );
}

#[test]
fn snapshot_truecolor_on_grayscale() {
    insta::assert_snapshot!(
        ansi_to_html("\x1b[38;2;255;105;180;48;5;236mpink\x1b[49m!"),
        @r#"<span style="color: rgb(255, 105, 180); background-color: rgb(48, 48, 48)">pink</span><span style="color: rgb(255, 105, 180)">!</span>"#
    );
}

#[test]
fn snapshot_injection_attempt() {
    insta::assert_snapshot!(
        ansi_to_html("\x1b[31m<img src=x onerror=\"alert('x')\">&\x1b[0m"),
        @r#"<span style="color: #cc0000">&lt;img src=x onerror=&quot;alert(&#39;x&#39;)&quot;&gt;&amp;</span>"#
    );
}
