use vtree::prelude::*;

fn main() {
    element! {
        div(class: "hello") {
            "Hello "
            "World"
            "!"
        }
    }
    .print();
}
