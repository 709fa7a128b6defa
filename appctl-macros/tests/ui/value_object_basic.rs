use appctl_macros::value_object;

#[value_object]
struct Channel {
    name: String,
}

#[value_object(default = false)]
struct MethodName(String);

#[value_object(debug = false)]
struct Secret(String);

#[value_object]
enum Status {
    #[default]
    Idle,
    Closing,
}

fn main() {
    let c = Channel::default();
    let _ = format!("{:?}", c.clone());
    let _eq = c == Channel { name: String::new() };

    // default = false：只能显式构造
    let m = MethodName("forceExit".to_string());
    let _ = serde_json::to_string(&m).unwrap();

    let _ = Secret("s".to_string()).clone();

    let _s: Status = Default::default();
}
