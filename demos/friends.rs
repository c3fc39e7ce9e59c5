use mapaccess::{from_json_str, get_as};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let doc = from_json_str(
        r#"{
            "id": "9b92b11b-b57f-4fa6-af5e-e35a290dc764",
            "name": "John Doe",
            "friends": [
                { "name": "Jaime Mckinney" },
                { "name": "Evangeline Alvarado" },
                { "name": "Beth Cantrell" }
            ]
        }"#,
    )?;

    let best_friend: String = get_as(&doc, "friends[0].name")?;
    let my_name: String = get_as(&doc, "name")?;

    println!("My name is {} and my best friend's name is {}", my_name, best_friend);
    Ok(())
}
