use vtree::prelude::*;

struct Todo {
    title: &'static str,
    done: bool,
}

#[component]
fn TodoItem(props: &Props) -> impl Into<Renderable> {
    let done = props.get("done").and_then(PropValue::as_bool).unwrap_or(false);
    element! {
        li(class: if done { "done" } else { "open" }) {
            input(r#type: "checkbox", checked: done, disabled: true)
            #(props.get_str("title").unwrap_or_default())
        }
    }
}

#[component]
fn TodoList(props: &Props) -> impl Into<Renderable> {
    element! {
        Fragment {
            h2 { #(props.get_str("heading").unwrap_or("Todo")) }
            ul {
                #(props.children().to_vec())
            }
        }
    }
}

fn main() {
    env_logger::init();

    let todos = [
        Todo {
            title: "Write the renderer",
            done: true,
        },
        Todo {
            title: "Escape <markup> & \"quotes\"",
            done: false,
        },
    ];

    let items = todos
        .iter()
        .map(|todo| element!(TodoItem(title: todo.title, done: todo.done)))
        .collect::<Vec<_>>();

    let page = element! {
        main {
            TodoList(heading: "Today") {
                #(items)
            }
            footer {
                #(todos.iter().filter(|todo| !todo.done).count())
                " remaining"
            }
        }
    };

    let out = render_to_text(page, 0);
    log::info!(lines = out.lines().count(); "Rendered page");
    println!("{}", out);
}
