use activity_board::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
