//! Built-in knowledge table
//!
//! Seeded into every new store. Rows are `(topic, category, keywords, info)`
//! with keywords comma-separated.

use super::knowledge::KnowledgeEntry;

const SEED: &[(&str, &str, &str, &str)] = &[
    ("saludo", "conversacion", "hola,saludo,buenos dias",
     "¡Hola! Soy Baro, tu asistente inteligente. ¿En qué puedo ayudarte hoy?"),
    ("despedida", "conversacion", "adios,despedida,hasta luego",
     "¡Hasta luego! Fue un placer ayudarte. Que tengas un excelente día."),
    ("baro", "identidad", "quien eres,presentacion,tu nombre",
     "Soy Baro, un asistente de voz inteligente avanzado, similar a Alexa. Puedo ayudarte con información, clima, noticias, cálculos, búsquedas, música y mucho más. Tengo capacidad de aprender cosas nuevas que me enseñes."),
    ("gracias", "conversacion", "gracias,agradecimiento",
     "¡De nada! Es un placer ayudarte. Estoy aquí para lo que necesites."),

    ("inteligencia artificial", "tecnologia", "ia,ai,artificial intelligence",
     "La inteligencia artificial o IA es la capacidad de las máquinas para realizar tareas que normalmente requieren inteligencia humana: razonar, aprender de experiencias, resolver problemas complejos, reconocer patrones y tomar decisiones."),
    ("machine learning", "tecnologia", "ml,aprendizaje automatico",
     "El machine learning o aprendizaje automático es una rama de la IA donde los algoritmos aprenden patrones de grandes cantidades de datos sin ser programados explícitamente, mejorando su rendimiento con la experiencia."),
    ("deep learning", "tecnologia", "redes neuronales,neural networks",
     "El deep learning o aprendizaje profundo usa redes neuronales artificiales con múltiples capas para procesar información compleja como imágenes, voz y texto, siendo la base de sistemas como reconocimiento facial y asistentes de voz."),
    ("chatgpt", "tecnologia", "openai,gpt,lenguaje",
     "ChatGPT es un modelo de lenguaje de inteligencia artificial creado por OpenAI que puede mantener conversaciones, responder preguntas, escribir código, crear contenido y ayudar en múltiples tareas usando procesamiento de lenguaje natural."),
    ("alexa", "tecnologia", "amazon,asistente virtual",
     "Alexa es el asistente virtual de Amazon que funciona mediante voz, puede reproducir música, controlar dispositivos inteligentes, responder preguntas, configurar alarmas y muchas otras tareas del hogar."),
    ("python", "tecnologia", "programacion,lenguaje",
     "Python es un lenguaje de programación de alto nivel, interpretado, versátil y fácil de aprender. Es muy popular en ciencia de datos, inteligencia artificial, desarrollo web, automatización y aplicaciones científicas."),
    ("javascript", "tecnologia", "js,web,programacion",
     "JavaScript es el lenguaje de programación principal de la web, usado para crear páginas interactivas, aplicaciones web, servidores con Node.js y aplicaciones móviles."),
    ("algoritmo", "tecnologia", "programacion,logica",
     "Un algoritmo es un conjunto finito de instrucciones paso a paso, bien definidas y ordenadas, diseñadas para resolver un problema específico o realizar una tarea, como ordenar datos o buscar información."),
    ("internet", "tecnologia", "web,red",
     "Internet es una red global de computadoras interconectadas que permite compartir información, comunicarse, acceder a servicios en línea y conectar a miles de millones de personas en todo el mundo."),
    ("redes sociales", "tecnologia", "social media,facebook,instagram",
     "Las redes sociales son plataformas digitales como Facebook, Instagram, X (Twitter), TikTok y LinkedIn que permiten a las personas conectarse, compartir contenido, comunicarse y construir comunidades virtuales."),
    ("blockchain", "tecnologia", "criptomonedas,bitcoin",
     "Blockchain o cadena de bloques es una tecnología de registro distribuido que almacena información de forma segura, transparente e inmutable, siendo la base de criptomonedas como Bitcoin."),
    ("bitcoin", "tecnologia", "cripto,criptomoneda",
     "Bitcoin es la primera y más conocida criptomoneda descentralizada, creada en 2009 por Satoshi Nakamoto. Funciona sin bancos centrales usando tecnología blockchain para transacciones seguras."),
    ("realidad virtual", "tecnologia", "vr,metaverso",
     "La realidad virtual o VR es una tecnología que crea entornos tridimensionales inmersivos usando dispositivos como visores especiales, permitiendo experiencias interactivas en mundos digitales."),
    ("realidad aumentada", "tecnologia", "ar,pokemon go",
     "La realidad aumentada o AR superpone elementos digitales sobre el mundo real a través de dispositivos como smartphones o gafas especiales, mezclando lo virtual con lo físico."),
    ("cloud computing", "tecnologia", "nube,servidor",
     "La computación en la nube permite acceder a recursos informáticos como servidores, almacenamiento y aplicaciones a través de internet, sin necesidad de infraestructura física local."),
    ("ciberseguridad", "tecnologia", "seguridad,hackers",
     "La ciberseguridad es la práctica de proteger sistemas, redes y datos de ataques digitales, malware, hackers y accesos no autorizados mediante tecnologías y procedimientos de seguridad."),

    ("física", "ciencia", "ciencia,materia,energia",
     "La física es la ciencia natural que estudia las propiedades fundamentales de la materia, la energía, el espacio, el tiempo y sus interacciones, explicando cómo funciona el universo."),
    ("química", "ciencia", "ciencia,elementos,moleculas",
     "La química estudia la composición, estructura, propiedades y transformaciones de la materia, incluyendo átomos, moléculas, elementos y compuestos químicos."),
    ("biología", "ciencia", "vida,organismos,celulas",
     "La biología es la ciencia que estudia los seres vivos: su estructura, función, crecimiento, evolución, distribución y taxonomía, desde células hasta ecosistemas completos."),
    ("matemáticas", "ciencia", "numeros,calculo,algebra",
     "Las matemáticas estudian números, cantidades, formas, patrones y estructuras mediante razonamiento lógico, siendo fundamentales para ciencia, tecnología, ingeniería y economía."),
    ("astronomía", "ciencia", "espacio,estrellas,universo",
     "La astronomía es la ciencia que estudia los cuerpos celestes como estrellas, planetas, galaxias, cometas y fenómenos del universo, usando telescopios y análisis de luz."),
    ("geología", "ciencia", "tierra,rocas,volcanes",
     "La geología estudia la composición, estructura y procesos de la Tierra, incluyendo rocas, minerales, terremotos, volcanes y la historia del planeta."),
    ("medicina", "ciencia", "salud,doctor,enfermedad",
     "La medicina es la ciencia y práctica del diagnóstico, tratamiento y prevención de enfermedades, lesiones y condiciones que afectan la salud humana."),
    ("genética", "ciencia", "adn,genes,herencia",
     "La genética estudia los genes, la herencia y la variación de los seres vivos, explicando cómo se transmiten características de padres a hijos a través del ADN."),
    ("evolución", "ciencia", "darwin,especies,seleccion natural",
     "La evolución es el proceso mediante el cual las especies cambian a lo largo del tiempo a través de selección natural y mutaciones genéticas, teoría propuesta por Charles Darwin."),
    ("ecología", "ciencia", "ambiente,ecosistema,naturaleza",
     "La ecología estudia las relaciones entre los seres vivos y su ambiente, incluyendo ecosistemas, cadenas alimentarias, biodiversidad y conservación ambiental."),

    ("albert einstein", "historia", "cientifico,fisica,relatividad",
     "Albert Einstein fue un físico teórico alemán, considerado el científico más importante del siglo 20. Desarrolló la teoría de la relatividad y la famosa ecuación E=mc², revolucionando nuestra comprensión del espacio, tiempo y energía."),
    ("isaac newton", "historia", "cientifico,gravedad,leyes",
     "Isaac Newton fue un matemático y físico inglés del siglo 17 que formuló las leyes del movimiento y la gravitación universal, inventó el cálculo y realizó descubrimientos fundamentales en óptica."),
    ("leonardo da vinci", "historia", "artista,inventor,renacimiento",
     "Leonardo da Vinci fue un genio renacentista italiano: pintor, inventor, científico e ingeniero. Creó obras maestras como La Mona Lisa y La Última Cena, y diseñó inventos adelantados a su época."),
    ("marie curie", "historia", "cientifica,radioactividad,nobel",
     "Marie Curie fue una física y química polaco-francesa, pionera en radioactividad. Fue la primera mujer en ganar un Premio Nobel y la única persona en ganarlo en dos ciencias diferentes: Física y Química."),
    ("nikola tesla", "historia", "inventor,electricidad,ingeniero",
     "Nikola Tesla fue un inventor e ingeniero serbio-estadounidense que revolucionó la electricidad con sus inventos en corriente alterna, bobinas, radio y energía inalámbrica."),
    ("stephen hawking", "historia", "cientifico,agujeros negros,cosmologia",
     "Stephen Hawking fue un físico teórico británico famoso por sus estudios sobre agujeros negros, cosmología y el origen del universo, a pesar de padecer esclerosis lateral amiotrófica."),

    ("cuba", "geografia", "pais,caribe,isla",
     "Cuba es la isla más grande del Caribe, ubicada entre el Mar Caribe y el Océano Atlántico. Es conocida por su rica historia, la Revolución Cubana, su música vibrante como la salsa y el son, sus playas paradisíacas, arquitectura colonial, automóviles clásicos y la producción de ron y tabaco."),
    ("habana", "geografia", "capital,ciudad,cuba",
     "La Habana es la capital de Cuba y su ciudad más grande. Fundada en 1519, es famosa por su arquitectura colonial española, el icónico Malecón, autos clásicos americanos de los años 50, música en vivo, ron y puros. Su centro histórico es Patrimonio de la Humanidad."),
    ("fidel castro", "historia", "revolucion,lider,cuba",
     "Fidel Castro fue un revolucionario y político cubano que lideró la Revolución Cubana de 1959, derrocando al dictador Fulgencio Batista. Fue presidente de Cuba desde 1959 hasta 2008, estableciendo un gobierno socialista."),
    ("che guevara", "historia", "revolucionario,argentina,cuba",
     "Ernesto 'Che' Guevara fue un revolucionario marxista argentino-cubano, médico, guerrillero, escritor y figura clave de la Revolución Cubana junto a Fidel Castro. Se convirtió en un símbolo mundial de rebeldía y lucha contra la opresión."),
    ("revolución cubana", "historia", "cuba,1959,fidel",
     "La Revolución Cubana fue un movimiento armado liderado por Fidel Castro, Che Guevara y otros, que en 1959 derrocó al dictador Fulgencio Batista y estableció un gobierno socialista en Cuba, cambiando radicalmente el país."),
    ("salsa", "cultura", "musica,baile,caribe",
     "La salsa es un género musical y estilo de baile caribeño que fusiona son cubano, mambo, jazz y otros ritmos afrocaribeños. Surgió en Nueva York en los años 60-70 entre comunidades latinas, especialmente puertorriqueñas y cubanas."),
    ("son cubano", "cultura", "musica,cuba,tradicional",
     "El son cubano es un género musical tradicional de Cuba que combina instrumentos españoles con ritmos africanos. Es la base de la salsa y otros géneros caribeños, caracterizado por el uso de la clave, guitarra y percusión."),
    ("buena vista social club", "cultura", "musica,cuba,son",
     "Buena Vista Social Club fue un proyecto musical que reunió a legendarios músicos cubanos en 1997, rescatando el son cubano tradicional y logrando fama mundial con su álbum homónimo y documental."),

    ("sol", "ciencia", "estrella,sistema solar,luz",
     "El Sol es la estrella central de nuestro sistema solar, una esfera gigante de plasma ardiente que genera luz y calor mediante fusión nuclear. Tiene 109 veces el diámetro de la Tierra y representa el 99.86% de la masa del sistema solar."),
    ("tierra", "ciencia", "planeta,mundo,vida",
     "La Tierra es el tercer planeta desde el Sol y el único conocido que alberga vida. Tiene aproximadamente 4.500 millones de años, 71% de su superficie está cubierta de agua, y posee una atmósfera rica en oxígeno y nitrógeno."),
    ("luna", "ciencia", "satelite,espacio,mareas",
     "La Luna es el único satélite natural de la Tierra, formado hace unos 4.500 millones de años. Influye en las mareas oceánicas, tiene aproximadamente un cuarto del diámetro terrestre y ha sido visitada por astronautas."),
    ("marte", "ciencia", "planeta,rojo,espacio",
     "Marte es el cuarto planeta del sistema solar, conocido como el 'planeta rojo' por su color oxidado. Es el planeta más explorado después de la Tierra y objetivo de futuras misiones humanas."),
    ("clima", "ciencia", "tiempo,meteorologia,temperatura",
     "El clima es el patrón promedio de condiciones meteorológicas (temperatura, precipitación, viento) en una región durante periodos largos, generalmente 30 años o más."),
    ("cambio climático", "ciencia", "calentamiento,ambiente,co2",
     "El cambio climático es el calentamiento gradual de la Tierra causado principalmente por emisiones humanas de gases de efecto invernadero como CO2. Provoca derretimiento de glaciares, aumento del nivel del mar, eventos climáticos extremos y alteración de ecosistemas."),
    ("energía renovable", "ciencia", "solar,eolica,sostenible",
     "Las energías renovables son fuentes de energía sostenibles y limpias que no se agotan: solar, eólica, hidroeléctrica, geotérmica y biomasa. Son clave para combatir el cambio climático."),
    ("reciclaje", "ciencia", "basura,ambiente,reutilizar",
     "El reciclaje es el proceso de convertir materiales de desecho en nuevos productos, reduciendo el uso de recursos naturales, ahorrando energía y disminuyendo la contaminación ambiental."),
    ("agua", "ciencia", "h2o,vida,liquido",
     "El agua es una sustancia química esencial para toda forma de vida conocida, compuesta por dos átomos de hidrógeno y uno de oxígeno (H2O). Cubre el 71% de la superficie terrestre."),
    ("oxígeno", "ciencia", "gas,respiracion,o2",
     "El oxígeno es un elemento químico esencial para la respiración de la mayoría de los seres vivos. Constituye el 21% de la atmósfera terrestre y es producido principalmente por plantas mediante fotosíntesis."),
    ("árbol", "ciencia", "planta,bosque,naturaleza",
     "Los árboles son plantas perennes de tallo leñoso que producen oxígeno, absorben dióxido de carbono, proporcionan hábitat para animales, previenen erosión y son fundamentales para los ecosistemas."),
    ("selva amazónica", "geografia", "bosque,brasil,biodiversidad",
     "La selva amazónica es la selva tropical más grande del mundo, ubicada en Sudamérica. Produce el 20% del oxígeno mundial, alberga millones de especies y regula el clima global."),

    ("cerebro", "ciencia", "organo,mente,neurona",
     "El cerebro es el órgano más complejo del cuerpo humano, centro del sistema nervioso. Controla pensamientos, memoria, emociones, movimiento, y todas las funciones vitales. Contiene aproximadamente 86 mil millones de neuronas."),
    ("corazón", "ciencia", "organo,sangre,latido",
     "El corazón es el músculo que bombea sangre a todo el cuerpo, distribuyendo oxígeno y nutrientes. Late aproximadamente 100.000 veces al día, bombeando unos 7.500 litros de sangre."),
    ("adn", "ciencia", "genetica,genes,celula",
     "El ADN (ácido desoxirribonucleico) es la molécula que contiene las instrucciones genéticas para el desarrollo y funcionamiento de todos los seres vivos. Tiene forma de doble hélice."),
    ("vacuna", "ciencia", "medicina,inmunidad,prevención",
     "Las vacunas son preparaciones biológicas que entrenan al sistema inmunológico para reconocer y combatir enfermedades específicas sin causar la enfermedad, previniendo infecciones graves."),
    ("covid", "ciencia", "coronavirus,pandemia,enfermedad",
     "COVID-19 es una enfermedad infecciosa causada por el coronavirus SARS-CoV-2, que provocó una pandemia mundial desde 2020 afectando a millones de personas."),
    ("diabetes", "ciencia", "enfermedad,insulina,azucar",
     "La diabetes es una enfermedad crónica que ocurre cuando el páncreas no produce suficiente insulina o el cuerpo no puede usar eficazmente la insulina que produce, elevando los niveles de azúcar en sangre."),
    ("cáncer", "ciencia", "enfermedad,celulas,tumor",
     "El cáncer es un grupo de enfermedades caracterizadas por el crecimiento descontrolado de células anormales que pueden invadir otros tejidos. Existen más de 100 tipos diferentes."),

    ("historia", "cultura", "pasado,civilizacion,eventos",
     "La historia es la ciencia que estudia y relata los acontecimientos del pasado de la humanidad, analizando documentos, evidencias arqueológicas y testimonios para comprender cómo evolucionaron las sociedades."),
    ("filosofía", "cultura", "pensamiento,sabiduria,razón",
     "La filosofía es la disciplina que busca respuestas fundamentales sobre la existencia, el conocimiento, la verdad, la ética, la mente y el lenguaje mediante el razonamiento y la argumentación."),
    ("arte", "cultura", "creatividad,belleza,expresion",
     "El arte es la expresión creativa humana que produce obras de valor estético o emocional: pintura, escultura, música, literatura, danza, cine y otras manifestaciones culturales."),
    ("música", "cultura", "sonido,melodia,canción",
     "La música es el arte de combinar sonidos de forma armoniosa y expresiva usando ritmo, melodía y armonía, presente en todas las culturas humanas."),
    ("literatura", "cultura", "libros,escritura,poesia",
     "La literatura es el arte de la expresión escrita, abarcando novelas, poesía, ensayos, teatro y otros géneros que usan el lenguaje para crear obras artísticas y transmitir ideas."),
    ("pintura", "cultura", "arte,color,cuadro",
     "La pintura es el arte de aplicar pigmentos sobre una superficie para crear imágenes, expresar emociones o representar la realidad, con estilos desde realismo hasta abstracción."),

    ("amor", "emocion", "sentimiento,afecto,cariño",
     "El amor es un sentimiento profundo de afecto, cariño, atracción y conexión emocional hacia otra persona, ser vivo o cosa. Puede ser romántico, fraternal, filial o universal."),
    ("felicidad", "emocion", "alegria,bienestar,satisfaccion",
     "La felicidad es un estado emocional de bienestar, satisfacción y plenitud. Puede ser momentánea por eventos agradables o duradera como estilo de vida positivo."),
    ("tristeza", "emocion", "pena,melancolia,dolor",
     "La tristeza es una emoción natural de dolor emocional, melancolía o desánimo, generalmente causada por pérdida, decepción o situaciones difíciles."),
    ("miedo", "emocion", "temor,susto,ansiedad",
     "El miedo es una emoción básica de alerta ante peligros reales o percibidos, que prepara al cuerpo para huir o enfrentar amenazas."),
    ("esperanza", "emocion", "fe,optimismo,confianza",
     "La esperanza es el sentimiento de confianza y optimismo de que algo deseado pueda suceder o mejore en el futuro."),

    ("fútbol", "deporte", "soccer,balon,mundial",
     "El fútbol es el deporte más popular del mundo, jugado por dos equipos de 11 jugadores que intentan meter un balón en la portería contraria usando principalmente los pies."),
    ("basketball", "deporte", "nba,basquet,aro",
     "El basketball o baloncesto es un deporte de equipo donde dos equipos de 5 jugadores intentan encestar un balón en un aro elevado, usando las manos."),
    ("béisbol", "deporte", "pelota,cuba,mlb",
     "El béisbol es un deporte muy popular en Cuba, EE.UU. y Japón, donde dos equipos alternan batear y fildear, intentando anotar carreras."),
    ("ajedrez", "deporte", "estrategia,tablero,rey",
     "El ajedrez es un juego de estrategia para dos jugadores en un tablero de 64 casillas, cada uno con 16 piezas que mueven según reglas específicas, buscando hacer jaque mate al rey contrario."),
    ("olimpiadas", "deporte", "juegos,competencia,mundial",
     "Los Juegos Olímpicos son el mayor evento deportivo mundial, celebrado cada 4 años, donde atletas de todos los países compiten en múltiples disciplinas."),

    ("comida", "cultura", "gastronomia,cocina,alimentos",
     "La comida cubana es variada y sabrosa, destacando arroz con frijoles negros (moros y cristianos), ropa vieja, lechón asado, yuca con mojo, tostones, plátanos maduros y tamales."),
    ("café", "cultura", "bebida,cuba,cafecito",
     "El café cubano es mundialmente famoso por ser fuerte, aromático y dulce. Se sirve en tacitas pequeñas, muy concentrado, y es parte esencial de la cultura social cubana."),
    ("pizza", "comida", "italiana,masa,queso",
     "La pizza es un plato italiano de masa horneada cubierta con salsa de tomate, queso y diversos ingredientes. Se ha convertido en uno de los alimentos más populares del mundo."),
    ("chocolate", "comida", "cacao,dulce,postre",
     "El chocolate se hace de semillas de cacao, originario de América. Puede ser dulce, amargo o con leche, y es una de las golosinas más amadas universalmente."),

    ("película", "cultura", "cine,film,movie",
     "Las películas o cine son obras audiovisuales que cuentan historias mediante imágenes en movimiento, sonido, actuación y efectos visuales."),
    ("netflix", "tecnologia", "streaming,series,peliculas",
     "Netflix es el servicio de streaming más popular del mundo, ofreciendo películas, series, documentales y contenido original bajo demanda por suscripción."),
    ("videojuegos", "tecnologia", "gaming,consola,juegos",
     "Los videojuegos son programas interactivos de entretenimiento donde los jugadores controlan personajes o situaciones en mundos virtuales, desde móviles hasta consolas avanzadas."),

    ("teletrabajo", "tecnologia", "remoto,casa,trabajo",
     "El teletrabajo o trabajo remoto permite a las personas trabajar desde casa u otros lugares fuera de la oficina usando internet y tecnología de comunicación."),
    ("streaming", "tecnologia", "video,musica,directo",
     "El streaming es la transmisión de contenido multimedia (video, audio) en tiempo real a través de internet sin necesidad de descargarlo completamente."),
    ("podcast", "tecnologia", "audio,radio,episodio",
     "Un podcast es un programa de audio digital episódico disponible en internet, que los usuarios pueden descargar o escuchar en streaming sobre temas diversos."),
    ("meme", "cultura", "internet,humor,viral",
     "Un meme es una idea, imagen, video o frase que se difunde rápidamente por internet, generalmente con intención humorística o satírica."),
    ("influencer", "cultura", "redes sociales,celebridad,seguidores",
     "Un influencer es una persona con gran número de seguidores en redes sociales que puede influir en las opiniones y decisiones de su audiencia, a menudo promocionando productos o ideas."),

    ("españa", "geografia", "pais,europa,español",
     "España es un país europeo en la Península Ibérica, conocido por su rica historia, arquitectura, gastronomía, flamenco, fútbol y ser la cuna del idioma español."),
    ("méxico", "geografia", "pais,america,azteca",
     "México es el país hispanohablante más poblado del mundo, conocido por su cultura azteca y maya, gastronomía (tacos, mole), tequila, mariachis y playas del Caribe."),
    ("argentina", "geografia", "pais,sudamerica,tango",
     "Argentina es un gran país sudamericano famoso por el tango, el asado, el fútbol, la Patagonia, sus vinos Malbec y haber sido hogar del Che Guevara y Maradona."),
    ("estados unidos", "geografia", "pais,usa,america",
     "Estados Unidos es la mayor potencia económica y militar mundial, conocido por su diversidad cultural, innovación tecnológica (Silicon Valley), entretenimiento (Hollywood) y grandes ciudades como Nueva York."),
    ("china", "geografia", "pais,asia,muralla",
     "China es el país más poblado del mundo con más de 1.400 millones de habitantes, una de las civilizaciones más antiguas, potencia económica global y hogar de la Gran Muralla."),
    ("japón", "geografia", "pais,asia,tokio",
     "Japón es un país insular asiático conocido por su avanzada tecnología, cultura única (anime, manga, samurái), gastronomía (sushi, ramen) y ciudades como Tokio."),

    ("dólar", "economia", "moneda,usd,dinero",
     "El dólar estadounidense es la moneda de reserva mundial más importante y usada en comercio internacional. Un dólar se divide en 100 centavos."),
    ("euro", "economia", "moneda,eur,europa",
     "El euro es la moneda oficial de 20 países de la Unión Europea, usado por más de 340 millones de personas, siendo la segunda moneda de reserva mundial."),
    ("banco", "economia", "dinero,credito,ahorro",
     "Un banco es una institución financiera que acepta depósitos, otorga préstamos, facilita pagos y ofrece servicios financieros a individuos y empresas."),
    ("universidad", "educacion", "estudio,carrera,academia",
     "Una universidad es una institución de educación superior que otorga títulos académicos (licenciatura, maestría, doctorado) y realiza investigación científica."),
    ("biblioteca", "educacion", "libros,lectura,estudio",
     "Una biblioteca es un lugar que almacena, organiza y presta libros y otros recursos para lectura, estudio e investigación de la comunidad."),
];

/// Seed rows as entries, in table order
pub fn seed_entries() -> Vec<KnowledgeEntry> {
    SEED.iter()
        .map(|(topic, category, keywords, info)| {
            let keywords = keywords
                .split(',')
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .collect();
            KnowledgeEntry::new(topic, *info, *category, keywords)
        })
        .collect()
}
