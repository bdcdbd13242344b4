use tolerance::*;

#[derive(Debug, PartialEq)]
enum NumberError {
    Unknown,
    Malformed,
}

fn word_to_int(input: &str) -> Result<i32, NumberError> {
    let words = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    ];
    if let Some(position) = words.iter().position(|word| *word == input) {
        return Ok(position as i32);
    }
    match input {
        "ten" | "hundred" | "thousand" => Err(NumberError::Unknown),
        _ => Err(NumberError::Malformed),
    }
}

/// octet parser that falls back to 255 instead of erroring
#[tolerant(substitute = 255)]
fn parse_octet(input: &str) -> Result<u8, std::num::ParseIntError> {
    input.parse()
}

/// async fetch with a canned message on failure
#[tolerant(substitute = String::from("<motd unavailable>"))]
async fn fetch_motd(fail: bool) -> Result<String, String> {
    if fail {
        Err("connection reset".to_string())
    } else {
        Ok("welcome to the server".to_string())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    println!("tolerance examples:\n");

    println!("1. parse silently, default substitute:");
    let parse_int = tolerate::<&str, i32, _>().wrap(|input, _| input.parse::<i32>());
    for input in ["0", "42", "forty-two"] {
        println!("   parse_int({input:?}) = {:?}", parse_int.invoke(input));
    }

    println!("\n2. substitute computed from the arguments:");
    let prefer_int = tolerate::<&str, String, _>()
        .with_substitute_fn(|input, _| input.to_string())
        .wrap(|input, _| input.parse::<i32>().map(|n| n.to_string()));
    for input in ["7", "seven"] {
        println!("   prefer_int({input:?}) = {:?}", prefer_int.invoke(input));
    }

    println!("\n3. swallow only listed error kinds:");
    let force_int = tolerate::<&str, i32, _>()
        .with_exceptions(|e| matches!(e, NumberError::Unknown | NumberError::Malformed))
        .wrap(|input, _| word_to_int(input));
    for input in ["zero", "ten", "foo"] {
        println!("   force_int({input:?}) = {:?}", force_int.invoke(input));
    }

    println!("\n4. per-call opt-out with fail_silently=false:");
    let result = force_int.call("ten", Kwargs::new().arg("fail_silently", false));
    println!("   force_int(\"ten\", fail_silently=false) = {result:?}");

    println!("\n5. reversed switch (tolerant unless aggressive=true):");
    let parse_quiet = tolerate::<&str, i32, _>()
        .with_switch(SwitchOptions::named("aggressive").reversed())
        .wrap(|input, _| input.parse::<i32>());
    println!("   parse_quiet(\"x\") = {:?}", parse_quiet.invoke("x"));
    println!(
        "   parse_quiet(\"x\", aggressive=true) = {:?}",
        parse_quiet.call("x", Kwargs::new().arg("aggressive", true))
    );

    println!("\n6. disabling tolerance globally:");
    {
        let _guard = disabled();
        println!("   while disabled: parse_int(\"x\") = {:?}", parse_int.invoke("x"));
    } // flag restored here
    println!("   after restore:  parse_int(\"x\") = {:?}", parse_int.invoke("x"));

    println!("\n7. observing swallowed errors:");
    let watched = tolerate::<&str, i32, _>()
        .on_tolerated(|e| eprintln!("   [tolerated] {e}"))
        .wrap(|input, _| input.parse::<i32>());
    println!("   watched(\"oops\") = {:?}", watched.invoke("oops"));

    println!("\n8. the #[tolerant] attribute:");
    for input in ["10", "300", "junk"] {
        println!("   parse_octet({input:?}) = {:?}", parse_octet(input));
    }
    println!("   fetch_motd(false) = {:?}", fetch_motd(false).await);
    println!("   fetch_motd(true)  = {:?}", fetch_motd(true).await);

    println!("\ncomplete!");
}
