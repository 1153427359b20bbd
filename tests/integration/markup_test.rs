//! Public API tests for the rendering engine.

use ansiboard::markup::{cube, grayscale, Palette};
use ansiboard::{
    ansi_to_html, contains_escape_markup, normalize_escapes, strip_escapes, Color, Renderer, Rgb,
};

#[test]
fn plain_text_renders_as_escaped_text() {
    let text = "Re: <Subject> \"quoted\" & 'more'";
    assert_eq!(
        ansi_to_html(text),
        "Re: &lt;Subject&gt; &quot;quoted&quot; &amp; &#39;more&#39;"
    );
}

#[test]
fn alias_and_control_byte_render_identically() {
    let alias = "^[[1;33mNew mail^[[0m from ^[[36msysop^[[m";
    assert_eq!(ansi_to_html(alias), ansi_to_html(&normalize_escapes(alias)));
    assert_eq!(
        ansi_to_html(alias),
        "<span style=\"font-weight: bold; color: #c4a000\">New mail</span> from \
         <span style=\"color: #06989a\">sysop</span>"
    );
}

#[test]
fn palette_boundary_values() {
    let palette = Palette::default();
    assert_eq!(palette.css_value(Color::Indexed(16)), "rgb(0, 0, 0)");
    assert_eq!(palette.css_value(Color::Indexed(231)), "rgb(255, 255, 255)");
    assert_eq!(palette.css_value(Color::Indexed(232)), "rgb(8, 8, 8)");
    assert_eq!(palette.css_value(Color::Indexed(255)), "rgb(238, 238, 238)");
    assert_eq!(palette.css_value(Color::Indexed(9)), "#ef2929");
    assert_eq!(cube(196), Rgb::new(255, 0, 0));
    assert_eq!(grayscale(244), Rgb::new(128, 128, 128));
}

#[test]
fn renderer_is_shareable_across_threads() {
    let renderer = Renderer::default();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let renderer = &renderer;
                scope.spawn(move || renderer.render(&format!("\x1b[3{}mchat {}", i, i)))
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let html = handle.join().unwrap();
            assert!(html.ends_with(&format!("chat {}</span>", i)));
        }
    });
}

#[test]
fn strip_and_detect_agree() {
    let post = "^[[2J^[[1;1H^[[44;37m BBS ^[[0m";
    assert!(contains_escape_markup(post));
    let plain = strip_escapes(post);
    assert_eq!(plain, " BBS ");
    assert!(!contains_escape_markup(&plain));
}
