//! Text output specs
//!
//! Each statement list is printed under a `# N` header, rendered back into
//! command syntax on one line.

use crate::prelude::*;

#[test]
fn statement_lists_are_numbered_in_order() {
    let script = Script::new(
        "\
# build
cd src
make all > build.log

make test && echo passed || echo failed   # report

(cd docs ; make) | tee docs.log
",
    );
    script.cmdstream().passes().stdout_eq(
        "\
# 1
  cd src ; make all >build.log
# 2
  make test && echo passed || echo failed
# 3
  (cd docs ; make) | tee docs.log
",
    );
}

#[test]
fn redirections_render_input_first() {
    cli()
        .stdin("sort > out.txt < in.txt")
        .passes()
        .stdout_eq("# 1\n  sort <in.txt >out.txt\n");
}

#[test]
fn operator_continues_across_blank_lines() {
    cli()
        .stdin("make &&\n\n# then\nmake install\n")
        .passes()
        .stdout_eq("# 1\n  make && make install\n");
}

#[test]
fn nested_subshells() {
    cli()
        .stdin("((a | b) && c) ; d")
        .passes()
        .stdout_eq("# 1\n  ((a | b) && c) ; d\n");
}

#[test]
fn spacing_is_normalized() {
    cli()
        .stdin("  gcc   -O2 -o main   main.c&&./main<input|sort  ")
        .passes()
        .stdout_eq("# 1\n  gcc -O2 -o main main.c && ./main <input | sort\n");
}

#[test]
fn rendered_output_parses_to_the_same_trees() {
    let script = Script::new("a | b && c ; d || e\n\n(x ; y) | z > out\n");
    let first = script.cmdstream().passes().stdout();

    let rendered: String = first
        .lines()
        .filter(|line| !line.starts_with('#'))
        .map(|line| format!("{}\n\n", line.trim()))
        .collect();
    cli().stdin(rendered).passes().stdout_eq(&first);
}
